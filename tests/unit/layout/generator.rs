use super::*;

fn vp(w: u32, h: u32) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[test]
fn grid_follows_orientation() {
    assert_eq!(
        GridShape::for_viewport(vp(390, 844)),
        GridShape {
            columns: 3,
            rows: 4
        }
    );
    assert_eq!(
        GridShape::for_viewport(vp(1920, 1080)),
        GridShape {
            columns: 4,
            rows: 3
        }
    );
    // Square counts as landscape.
    assert_eq!(GridShape::for_viewport(vp(600, 600)).columns, 4);
}

#[test]
fn aspect_is_clamped() {
    // Portrait: min(1.1, aspect * 1.2).
    let a = target_door_aspect(vp(500, 1000));
    assert!((a - 0.6).abs() < 1e-12);
    assert_eq!(target_door_aspect(vp(999, 1000)), 1.1);
    // Landscape: max(1.2, aspect * 0.8).
    let b = target_door_aspect(vp(2000, 1000));
    assert!((b - 1.6).abs() < 1e-12);
    assert_eq!(target_door_aspect(vp(1100, 1000)), 1.2);
}

#[test]
fn door_size_takes_width_or_height_branch() {
    // Wide cell: height-limited.
    let (w, h) = door_size_for_cell(400.0, 100.0, 1.0);
    assert_eq!(h, 85.0);
    assert_eq!(w, 85.0);
    // Tall cell: width-limited.
    let (w, h) = door_size_for_cell(100.0, 400.0, 1.0);
    assert_eq!(w, 90.0);
    assert_eq!(h, 90.0);
}

#[test]
fn output_is_cell_major_and_stays_in_cells() {
    let viewport = vp(1200, 600);
    let layout = generate(viewport, &mut LayoutRng::from_seed_u64(11)).unwrap();
    let (cw, ch) = GridShape::for_viewport(viewport).cell_size(viewport);
    for (idx, door) in layout.windows.iter().enumerate() {
        let col = (idx % 4) as f64;
        let row = (idx / 4) as f64;
        let p = door.position;
        assert!(p.x >= col * cw && p.x + p.width <= (col + 1.0) * cw);
        assert!(p.y >= row * ch && p.y + p.height <= (row + 1.0) * ch);
        assert!(!door.is_open);
    }
    layout.validate().unwrap();
}

#[test]
fn same_seed_same_layout() {
    let a = generate(vp(800, 600), &mut LayoutRng::from_seed_u64(9)).unwrap();
    let b = generate(vp(800, 600), &mut LayoutRng::from_seed_u64(9)).unwrap();
    assert_eq!(a, b);
    let c = generate(vp(800, 600), &mut LayoutRng::from_seed_u64(10)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn empty_viewport_is_rejected() {
    let zero = Viewport {
        width: 0,
        height: 100,
    };
    assert!(generate(zero, &mut LayoutRng::from_seed_u64(1)).is_err());
}
