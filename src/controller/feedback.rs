use crate::foundation::core::DayNumber;

/// Transient shake-and-message shown when a locked door is clicked.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedFeedback {
    pub is_shaking: bool,
    pub show_message: bool,
    /// Set once the message starts fading out.
    pub message_fading: bool,
    pub day: Option<DayNumber>,
    pub message: Option<String>,
}

impl LockedFeedback {
    pub(crate) fn start(&mut self, day: DayNumber, message: String) {
        *self = Self {
            is_shaking: true,
            show_message: true,
            message_fading: false,
            day: Some(day),
            message: Some(message),
        };
    }

    pub(crate) fn stop_shaking(&mut self) {
        self.is_shaking = false;
    }

    pub(crate) fn begin_fade(&mut self) {
        if self.show_message {
            self.message_fading = true;
        }
    }

    pub(crate) fn hide_message(&mut self) {
        self.show_message = false;
        self.message_fading = false;
        self.message = None;
        if !self.is_shaking {
            self.day = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_shaking || self.show_message
    }
}
