//! Headless engine for a twelve-door advent calendar.
//!
//! The crate owns everything about the calendar that is not drawing:
//!
//! 1. **Unlock**: `DayNumber + today -> bool`, plus the "opens tomorrow" message
//! 2. **Layout**: `Viewport + LayoutRng -> Layout` (scrambled, jittered grid), cached by viewport
//! 3. **Zoom**: `DoorBox + Viewport -> ZoomTransform`
//! 4. **Control**: [`CalendarController`] turns input events and host time into state changes and
//!    the route to mirror into browser history
//!
//! Hosts (wasm front-ends, native shells, the `advent` CLI) feed events in and render
//! [`CalendarController::layout`] under [`CalendarController::zoom`].
#![forbid(unsafe_code)]

mod assets;
mod audio;
mod config;
mod content;
mod controller;
mod foundation;
mod layout;
mod unlock;
mod zoom;

pub use assets::preload::{
    AssetLoader, AssetManifest, BACKGROUND_IMAGE, FsAssetLoader, PreloadReport,
    normalize_rel_path, preload, thumbnail_path,
};
pub use audio::session::{AudioSession, DEFAULT_VOLUME};
pub use config::settings::{CalendarConfig, DEFAULT_LAYOUT_KEY, DEFAULT_MUSIC_KEY, TimingConfig};
pub use content::meta::{PageMeta, SITE_DESCRIPTION, SITE_TITLE};
pub use content::registry::{ContentMedia, ContentRegistry, DayContent, DoorEffect, DoorTheme};
pub use controller::calendar::CalendarController;
pub use controller::feedback::LockedFeedback;
pub use controller::input::{CalendarEvent, Key};
pub use controller::route::Route;
pub use controller::timers::{TimerQueue, TimerToken};
pub use foundation::core::{Affine, DOOR_COUNT, DayNumber, Millis, Point, Rect, Vec2, Viewport};
pub use foundation::error::{CalendarError, CalendarResult};
pub use foundation::rng::LayoutRng;
pub use layout::cache::LayoutCache;
pub use layout::generator::{
    GridShape, JITTER_SLACK_SHARE, MAX_CELL_HEIGHT_FILL, MAX_CELL_WIDTH_FILL, door_size_for_cell,
    generate, target_door_aspect,
};
pub use layout::model::{Door, DoorBox, Layout};
pub use layout::store::{FileStore, KeyValueStore, MemoryStore};
pub use unlock::clock::{Clock, FixedClock, SystemClock};
pub use unlock::policy::UnlockPolicy;
pub use zoom::transform::{ZOOM_FILL, ZoomTransform};
