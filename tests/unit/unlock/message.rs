use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn relative_clause_buckets() {
    let today = date(2025, 12, 1); // a Monday
    assert_eq!(relative_clause(today, today), "today");
    assert_eq!(relative_clause(date(2025, 11, 20), today), "today");
    assert_eq!(relative_clause(date(2025, 12, 2), today), "tomorrow");
    assert_eq!(relative_clause(date(2025, 12, 3), today), "on Wednesday");
    assert_eq!(relative_clause(date(2025, 12, 7), today), "on Sunday");
    assert_eq!(
        relative_clause(date(2025, 12, 8), today),
        "on the 8th of December"
    );
    assert_eq!(
        relative_clause(date(2026, 1, 2), today),
        "on the 2nd of January"
    );
}

#[test]
fn ordinals_handle_teens() {
    assert_eq!(ordinal(1), "1st");
    assert_eq!(ordinal(2), "2nd");
    assert_eq!(ordinal(3), "3rd");
    assert_eq!(ordinal(4), "4th");
    assert_eq!(ordinal(11), "11th");
    assert_eq!(ordinal(12), "12th");
    assert_eq!(ordinal(13), "13th");
    assert_eq!(ordinal(21), "21st");
    assert_eq!(ordinal(22), "22nd");
    assert_eq!(ordinal(31), "31st");
}

#[test]
fn template_rotates_by_day_and_is_deterministic() {
    let today = date(2025, 12, 1);
    let target = date(2025, 12, 2);
    let a = opening_message(DayNumber::new(1).unwrap(), target, today);
    let b = opening_message(DayNumber::new(2).unwrap(), target, today);
    let c = opening_message(DayNumber::new(6).unwrap(), target, today);
    assert_ne!(a, b);
    assert_eq!(a, c);
    assert!(a.ends_with("tomorrow."));
    assert!(!a.contains("{when}"));
}
