use super::*;

#[test]
fn builtin_covers_every_day_once() {
    let reg = ContentRegistry::builtin();
    assert_eq!(reg.len(), usize::from(DOOR_COUNT));
    for day in DayNumber::all() {
        let entry = reg.get(day).unwrap();
        assert_eq!(entry.day, day);
        assert!(!entry.title.is_empty());
    }
}

#[test]
fn media_paths_follow_day_pattern() {
    let reg = ContentRegistry::builtin();
    let day2 = reg.get(DayNumber::new(2).unwrap()).unwrap();
    assert_eq!(
        day2.media,
        ContentMedia::Video("content/day2/video.mp4".to_string())
    );
}

#[test]
fn from_entries_keeps_first_and_sorts() {
    let reg = ContentRegistry::builtin();
    let d3 = reg.get(DayNumber::new(3).unwrap()).unwrap().clone();
    let d1 = reg.get(DayNumber::new(1).unwrap()).unwrap().clone();
    let mut dup = d3.clone();
    dup.title = "dup".to_string();
    let small = ContentRegistry::from_entries([d3, d1, dup]);
    assert_eq!(small.len(), 2);
    let days: Vec<u8> = small.iter().map(|e| e.day.get()).collect();
    assert_eq!(days, vec![1, 3]);
    assert_ne!(small.get(DayNumber::new(3).unwrap()).unwrap().title, "dup");
    assert!(small.get(DayNumber::new(7).unwrap()).is_none());
}

#[test]
fn effect_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&DoorEffect::Sparkles).unwrap(),
        "\"sparkles\""
    );
}
