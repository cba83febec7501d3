use super::*;
use crate::foundation::rng::LayoutRng;
use crate::layout::generator::generate;

fn sample() -> Layout {
    let vp = Viewport::new(1280, 720).unwrap();
    generate(vp, &mut LayoutRng::from_seed_u64(3)).unwrap()
}

#[test]
fn json_shape_uses_camel_case_keys() {
    let layout = sample();
    let v = serde_json::to_value(&layout).unwrap();
    assert!(v.get("windows").is_some());
    assert_eq!(v["viewportSize"]["width"], 1280);
    let door = &v["windows"][0];
    assert_eq!(door["isOpen"], false);
    assert!(door["thumbnailRef"].as_str().unwrap().starts_with("day"));
    assert!(door["position"]["width"].as_f64().unwrap() > 0.0);
}

#[test]
fn set_open_reports_changes() {
    let mut layout = sample();
    let d = DayNumber::new(4).unwrap();
    assert!(layout.set_open(d, true));
    assert!(!layout.set_open(d, true));
    assert!(layout.is_open(d));
    assert_eq!(layout.open_count(), 1);
    assert!(layout.set_open(d, false));
    assert_eq!(layout.open_count(), 0);
}

#[test]
fn validate_rejects_duplicates_and_escapes() {
    let mut dup = sample();
    dup.windows[1].day = dup.windows[0].day;
    assert!(dup.validate().is_err());

    let mut outside = sample();
    outside.windows[0].position.x = 1270.0;
    assert!(outside.validate().is_err());

    let mut flat = sample();
    flat.windows[2].position.height = 0.0;
    assert!(flat.validate().is_err());

    let mut short = sample();
    short.windows.pop();
    assert!(short.validate().is_err());

    sample().validate().unwrap();
}

#[test]
fn door_box_rect_and_center() {
    let b = DoorBox {
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.0,
    };
    assert_eq!(b.to_rect(), Rect::new(10.0, 20.0, 40.0, 60.0));
    assert_eq!(b.center(), (25.0, 40.0));
}
