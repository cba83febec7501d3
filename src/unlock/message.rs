use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::foundation::core::DayNumber;

// Indexed by `day % TEMPLATES.len()`; `{when}` is replaced by the relative clause.
const TEMPLATES: [&str; 5] = [
    "Not so fast! This door opens {when}.",
    "Patience is a virtue. Come back {when}.",
    "No peeking! You can open this one {when}.",
    "This surprise is still being wrapped. Try again {when}.",
    "Almost there! This door unlocks {when}.",
];

pub(crate) fn opening_message(day: DayNumber, target: NaiveDate, today: NaiveDate) -> String {
    let template = TEMPLATES[usize::from(day.get()) % TEMPLATES.len()];
    template.replace("{when}", &relative_clause(target, today))
}

/// "today", "tomorrow", "on Friday" within a week, otherwise "on the 24th of December".
pub(crate) fn relative_clause(target: NaiveDate, today: NaiveDate) -> String {
    let days = target.signed_duration_since(today).num_days();
    match days {
        i64::MIN..=0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        2..=6 => format!("on {}", weekday_name(target.weekday())),
        _ => format!(
            "on the {} of {}",
            ordinal(target.day()),
            month_name(target.month())
        ),
    }
}

pub(crate) fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

#[cfg(test)]
#[path = "../../tests/unit/unlock/message.rs"]
mod tests;
