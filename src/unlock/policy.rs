use chrono::{Days, NaiveDate};

use crate::{
    config::settings::CalendarConfig, foundation::core::DayNumber, unlock::clock::Clock,
    unlock::message,
};

/// Decides whether a door's content may be revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockPolicy {
    /// Date on which door 1 unlocks.
    pub first_door_date: NaiveDate,
    /// Development override: every door is openable.
    pub unlock_all: bool,
}

impl UnlockPolicy {
    pub fn new(first_door_date: NaiveDate) -> Self {
        Self {
            first_door_date,
            unlock_all: false,
        }
    }

    pub fn from_config(cfg: &CalendarConfig) -> Self {
        Self {
            first_door_date: cfg.first_door_date,
            unlock_all: cfg.unlock_all,
        }
    }

    pub fn with_unlock_all(mut self, unlock_all: bool) -> Self {
        self.unlock_all = unlock_all;
        self
    }

    /// First date on which `day` may be opened.
    pub fn target_date(&self, day: DayNumber) -> NaiveDate {
        let offset = Days::new(u64::from(day.get() - 1));
        self.first_door_date
            .checked_add_days(offset)
            .unwrap_or(NaiveDate::MAX)
    }

    /// Date-only comparison against the door's target date.
    pub fn can_open_on(&self, day: DayNumber, today: NaiveDate) -> bool {
        self.unlock_all || today >= self.target_date(day)
    }

    pub fn can_open(&self, day: DayNumber, clock: &dyn Clock) -> bool {
        self.can_open_on(day, clock.today())
    }

    /// Signed number of days until `day` unlocks; zero or negative once it has.
    pub fn days_until(&self, day: DayNumber, today: NaiveDate) -> i64 {
        self.target_date(day)
            .signed_duration_since(today)
            .num_days()
    }

    /// Human-readable note on when `day` becomes available.
    pub fn opening_date_message(&self, day: DayNumber, today: NaiveDate) -> String {
        message::opening_message(day, self.target_date(day), today)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/unlock/policy.rs"]
mod tests;
