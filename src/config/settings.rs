use std::{fs::File, io::BufReader, path::Path};

use chrono::NaiveDate;

use crate::foundation::error::{CalendarError, CalendarResult};

/// Storage key holding the serialized layout.
pub const DEFAULT_LAYOUT_KEY: &str = "calendarLayout";
/// Storage key holding the `"true"`/`"false"` music preference.
pub const DEFAULT_MUSIC_KEY: &str = "musicEnabled";

/// Calendar-wide settings.
///
/// Every field has a default, so a config file only needs the values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Date on which door 1 unlocks; door `n` unlocks `n - 1` days later.
    pub first_door_date: NaiveDate,
    /// Development override: every door may be opened regardless of date.
    pub unlock_all: bool,
    /// Public origin used for canonical and preview-image URLs (no trailing slash).
    pub site_base_url: String,
    pub layout_storage_key: String,
    pub music_storage_key: String,
    pub timing: TimingConfig,
    /// Minimum horizontal travel, in pixels, for a swipe to count.
    pub swipe_threshold_px: f64,
}

/// Delays driving the controller's delayed transitions and feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Dwell on the zoomed-out calendar before following a deep link.
    pub zoom_in_delay_ms: u64,
    /// Gap between zoom-out and zoom-in when moving between doors.
    pub navigation_delay_ms: u64,
    pub shake_ms: u64,
    pub message_ms: u64,
    pub message_fade_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            zoom_in_delay_ms: 1000,
            navigation_delay_ms: 1000,
            shake_ms: 820,
            message_ms: 2000,
            message_fade_ms: 300,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_door_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap_or_default(),
            unlock_all: false,
            site_base_url: "https://advent.example.com".to_string(),
            layout_storage_key: DEFAULT_LAYOUT_KEY.to_string(),
            music_storage_key: DEFAULT_MUSIC_KEY.to_string(),
            timing: TimingConfig::default(),
            swipe_threshold_px: 50.0,
        }
    }
}

impl CalendarConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CalendarResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CalendarError::validation(format!("parse calendar config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CalendarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CalendarError::validation(format!("open calendar config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> CalendarResult<()> {
        if self.layout_storage_key.trim().is_empty() {
            return Err(CalendarError::validation("layout_storage_key must not be empty"));
        }
        if self.music_storage_key.trim().is_empty() {
            return Err(CalendarError::validation("music_storage_key must not be empty"));
        }
        if self.layout_storage_key == self.music_storage_key {
            return Err(CalendarError::validation(
                "layout and music storage keys must differ",
            ));
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px > 0.0) {
            return Err(CalendarError::validation("swipe_threshold_px must be > 0"));
        }
        if self.timing.shake_ms == 0 || self.timing.message_ms == 0 {
            return Err(CalendarError::validation(
                "feedback durations must be > 0 ms",
            ));
        }
        Ok(())
    }

    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.site_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
