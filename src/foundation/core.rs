use std::{fmt, str::FromStr};

use crate::foundation::error::{CalendarError, CalendarResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Number of doors on the calendar.
pub const DOOR_COUNT: u8 = 12;

/// Day identity of a door, always in `1..=12`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayNumber(u8);

impl DayNumber {
    /// First door.
    pub const FIRST: Self = Self(1);
    /// Last door.
    pub const LAST: Self = Self(DOOR_COUNT);

    /// Create a validated day number.
    pub fn new(day: u8) -> CalendarResult<Self> {
        if !(1..=DOOR_COUNT).contains(&day) {
            return Err(CalendarError::validation(format!(
                "day must be in 1..={DOOR_COUNT}, got {day}"
            )));
        }
        Ok(Self(day))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-day tables.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All days in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=DOOR_COUNT).map(Self)
    }

    /// Neighbouring day `delta` steps away, or `None` when that leaves `1..=12`.
    pub fn offset(self, delta: i8) -> Option<Self> {
        let target = i16::from(self.0) + i16::from(delta);
        u8::try_from(target).ok().and_then(|d| Self::new(d).ok())
    }

    /// Asset reference for the door preview, `day{N}`.
    pub fn thumbnail_ref(self) -> String {
        format!("day{}", self.0)
    }
}

impl TryFrom<u8> for DayNumber {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayNumber> for u8 {
    fn from(value: DayNumber) -> Self {
        value.0
    }
}

impl FromStr for DayNumber {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u8 = s
            .trim()
            .parse()
            .map_err(|_| CalendarError::validation(format!("'{s}' is not a day number")))?;
        Self::new(raw)
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> CalendarResult<Self> {
        if width == 0 || height == 0 {
            return Err(CalendarError::validation("viewport width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    /// Width over height.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) * 0.5, f64::from(self.height) * 0.5)
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Monotonic host time in milliseconds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub fn after(self, delay_ms: u64) -> Self {
        Self(self.0.saturating_add(delay_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
