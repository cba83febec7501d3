use std::fmt;

use crate::foundation::core::DayNumber;

/// Client-side route. Derived from controller state, never the other way round.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/day/:day`
    Day(DayNumber),
    /// `/welcome`, the first-run music prompt.
    Welcome,
    /// Anything else, including `/day/` with an out-of-range or non-numeric day.
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Self::Home;
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("welcome"), None, None) => Self::Welcome,
            (Some("day"), Some(raw), None) => match raw.parse::<DayNumber>() {
                Ok(day) => Self::Day(day),
                Err(_) => Self::NotFound(path.to_string()),
            },
            _ => Self::NotFound(path.to_string()),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Day(day) => format!("/day/{day}"),
            Self::Welcome => "/welcome".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn from_active_day(active: Option<DayNumber>) -> Self {
        active.map_or(Self::Home, Self::Day)
    }

    pub fn day(&self) -> Option<DayNumber> {
        match self {
            Self::Day(day) => Some(*day),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/route.rs"]
mod tests;
