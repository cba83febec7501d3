use crate::{
    config::settings::DEFAULT_MUSIC_KEY,
    controller::route::Route,
    foundation::error::CalendarResult,
    layout::store::KeyValueStore,
};

pub const DEFAULT_VOLUME: f32 = 0.5;

/// Background-music state for the whole app.
///
/// Created once at the application root and handed by reference to whatever needs to read or
/// change playback. There is no global instance.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSession {
    key: String,
    music_enabled: Option<bool>,
    playing: bool,
    /// Paused because door media (video/audio) is playing.
    ducked: bool,
    volume: f32,
}

impl AudioSession {
    /// Read the stored music preference; anything but `"true"`/`"false"` counts as unset.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::load_with_key(store, DEFAULT_MUSIC_KEY)
    }

    pub fn load_with_key(store: &dyn KeyValueStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let music_enabled = match store.get_item(&key) {
            Ok(Some(raw)) => match raw.trim() {
                "true" => Some(true),
                "false" => Some(false),
                other => {
                    tracing::warn!(value = %other, "ignoring unreadable music preference");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "music preference unavailable");
                None
            }
        };
        Self {
            key,
            music_enabled,
            playing: false,
            ducked: false,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn music_enabled(&self) -> Option<bool> {
        self.music_enabled
    }

    /// First run: no preference recorded yet.
    pub fn needs_welcome(&self) -> bool {
        self.music_enabled.is_none()
    }

    /// Route to show on start-up: the welcome prompt until a preference exists.
    pub fn initial_route(&self, requested: Route) -> Route {
        if self.needs_welcome() {
            Route::Welcome
        } else {
            requested
        }
    }

    /// Record the preference and start or stop playback to match it.
    pub fn set_music_enabled(
        &mut self,
        store: &mut dyn KeyValueStore,
        enabled: bool,
    ) -> CalendarResult<()> {
        store.set_item(&self.key, if enabled { "true" } else { "false" })?;
        self.music_enabled = Some(enabled);
        if enabled {
            self.play();
        } else {
            self.pause();
        }
        Ok(())
    }

    /// Start playback if music is enabled and nothing else is playing.
    pub fn play(&mut self) -> bool {
        if self.music_enabled == Some(true) && !self.ducked {
            self.playing = true;
        }
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Door media started: silence the music until [`Self::end_door_media`].
    pub fn begin_door_media(&mut self) {
        if !self.ducked {
            self.ducked = true;
            self.playing = false;
        }
    }

    pub fn end_door_media(&mut self) {
        if self.ducked {
            self.ducked = false;
            self.play();
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set volume, clamped to `[0, 1]`; non-finite values are ignored.
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/session.rs"]
mod tests;
