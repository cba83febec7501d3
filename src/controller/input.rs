use crate::{controller::route::Route, foundation::core::DayNumber, foundation::core::Viewport};

/// Keys the calendar reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Enter,
    Backspace,
    ArrowLeft,
    ArrowRight,
    /// Digit key `0..=9`.
    Digit(u8),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            "Backspace" => Self::Backspace,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => match key.as_bytes() {
                [d @ b'0'..=b'9'] => Self::Digit(d - b'0'),
                _ => Self::Other,
            },
        }
    }

    /// Keys that leave a zoomed door.
    pub fn is_dismiss(self) -> bool {
        matches!(
            self,
            Self::Escape | Self::Space | Self::Enter | Self::Backspace
        )
    }
}

/// User or host input fed to the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum CalendarEvent {
    /// A door was clicked while the calendar is zoomed out.
    DoorClicked(DayNumber),
    /// The front face of a door was clicked while zoomed in.
    DoorFrontClicked(DayNumber),
    /// The back face of an opened door was clicked.
    DoorBackClicked(DayNumber),
    BackgroundClicked,
    Key(Key),
    Wheel,
    /// Completed touch gesture; `dx > 0` is rightward.
    Swipe {
        dx: f64,
        dy: f64,
        started_on_back: bool,
    },
    Resize(Viewport),
    /// Browser navigation (back/forward, typed URL).
    Navigate(Route),
}

#[cfg(test)]
#[path = "../../tests/unit/controller/input.rs"]
mod tests;
