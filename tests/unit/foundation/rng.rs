use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = LayoutRng::from_seed_u64(7);
    let mut b = LayoutRng::from_seed_u64(7);
    let mut xs = [1, 2, 3, 4, 5, 6];
    let mut ys = xs;
    a.shuffle(&mut xs);
    b.shuffle(&mut ys);
    assert_eq!(xs, ys);
    assert_eq!(a.symmetric(3.0), b.symmetric(3.0));
}

#[test]
fn symmetric_stays_in_bounds() {
    let mut rng = LayoutRng::from_seed_u64(1);
    for _ in 0..1000 {
        let v = rng.symmetric(2.5);
        assert!((-2.5..=2.5).contains(&v));
    }
    assert_eq!(rng.symmetric(0.0), 0.0);
}
