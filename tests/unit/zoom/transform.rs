use super::*;
use crate::foundation::core::Point;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn focus_matches_documented_formula() {
    let vp = Viewport::new(1000, 800).unwrap();
    let door = DoorBox {
        x: 100.0,
        y: 50.0,
        width: 200.0,
        height: 100.0,
    };
    let z = ZoomTransform::focus(door, vp);
    // min(800/200, 640/100) = 4
    assert!(approx(z.scale, 4.0));
    assert!(approx(z.translate_x, (500.0 - 200.0) * 4.0));
    assert!(approx(z.translate_y, (400.0 - 100.0) * 4.0));
}

#[test]
fn affine_moves_door_center_to_viewport_center() {
    let vp = Viewport::new(1280, 720).unwrap();
    let door = DoorBox {
        x: 900.0,
        y: 480.0,
        width: 150.0,
        height: 120.0,
    };
    let z = ZoomTransform::focus(door, vp);
    let a = z.to_affine(vp);
    let (cx, cy) = door.center();
    let mapped = a * Point::new(cx, cy);
    assert!(approx(mapped.x, 640.0));
    assert!(approx(mapped.y, 360.0));

    let r = a.transform_rect_bbox(door.to_rect());
    assert!(r.width() <= 0.8 * 1280.0 + 1e-9);
    assert!(r.height() <= 0.8 * 720.0 + 1e-9);
    assert!(approx(r.width(), 0.8 * 1280.0) || approx(r.height(), 0.8 * 720.0));
}

#[test]
fn identity_is_default_and_noop() {
    let vp = Viewport::new(640, 480).unwrap();
    assert!(ZoomTransform::default().is_identity());
    assert_eq!(ZoomTransform::IDENTITY.to_affine(vp), Affine::IDENTITY);
}

#[test]
fn degenerate_door_stays_zoomed_out() {
    let vp = Viewport::new(640, 480).unwrap();
    let door = DoorBox {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 10.0,
    };
    assert!(ZoomTransform::focus(door, vp).is_identity());
}

#[test]
fn serde_uses_camel_case() {
    let v = serde_json::to_value(ZoomTransform::IDENTITY).unwrap();
    assert_eq!(v["translateX"], 0.0);
    assert_eq!(v["scale"], 1.0);
}
