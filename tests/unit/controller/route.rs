use super::*;

fn day(n: u8) -> DayNumber {
    DayNumber::new(n).unwrap()
}

#[test]
fn parses_known_routes() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/day/7"), Route::Day(day(7)));
    assert_eq!(Route::parse("/day/12/"), Route::Day(day(12)));
    assert_eq!(Route::parse("/day/3?utm=x"), Route::Day(day(3)));
    assert_eq!(Route::parse("/welcome"), Route::Welcome);
}

#[test]
fn bad_days_are_not_found() {
    for p in ["/day/0", "/day/13", "/day/abc", "/day/", "/day/1/extra", "/nope"] {
        assert!(
            matches!(Route::parse(p), Route::NotFound(_)),
            "{p} should not resolve"
        );
    }
}

#[test]
fn path_roundtrip() {
    for route in [Route::Home, Route::Day(day(9)), Route::Welcome] {
        assert_eq!(Route::parse(&route.to_path()), route);
    }
    assert_eq!(Route::Day(day(4)).to_string(), "/day/4");
}

#[test]
fn derived_from_active_day() {
    assert_eq!(Route::from_active_day(None), Route::Home);
    assert_eq!(Route::from_active_day(Some(day(2))), Route::Day(day(2)));
    assert_eq!(Route::Day(day(2)).day(), Some(day(2)));
    assert_eq!(Route::Welcome.day(), None);
}
