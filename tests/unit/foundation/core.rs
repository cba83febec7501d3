use super::*;

#[test]
fn day_number_rejects_out_of_range() {
    assert!(DayNumber::new(0).is_err());
    assert!(DayNumber::new(13).is_err());
    assert_eq!(DayNumber::new(12).unwrap(), DayNumber::LAST);
    assert_eq!(DayNumber::all().count(), usize::from(DOOR_COUNT));
}

#[test]
fn day_number_parses_and_offsets() {
    let d: DayNumber = "7".parse().unwrap();
    assert_eq!(d.get(), 7);
    assert_eq!(d.index(), 6);
    assert_eq!(d.offset(1).map(DayNumber::get), Some(8));
    assert_eq!(DayNumber::FIRST.offset(-1), None);
    assert_eq!(DayNumber::LAST.offset(1), None);
    assert!("abc".parse::<DayNumber>().is_err());
    assert_eq!(d.thumbnail_ref(), "day7");
}

#[test]
fn day_number_serde_is_a_plain_integer() {
    let d = DayNumber::new(3).unwrap();
    assert_eq!(serde_json::to_string(&d).unwrap(), "3");
    assert!(serde_json::from_str::<DayNumber>("42").is_err());
}

#[test]
fn viewport_orientation_and_center() {
    let v = Viewport::new(390, 844).unwrap();
    assert!(v.is_portrait());
    assert_eq!(v.center(), Point::new(195.0, 422.0));
    assert!(!Viewport::new(800, 800).unwrap().is_portrait());
    assert!(Viewport::new(0, 10).is_err());
}

#[test]
fn millis_after_saturates() {
    assert_eq!(Millis(5).after(10), Millis(15));
    assert_eq!(Millis(u64::MAX).after(1), Millis(u64::MAX));
}
