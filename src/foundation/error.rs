/// Convenience result type used across the calendar engine.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CalendarError {
    /// Invalid caller-provided data (day numbers, viewports, config).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures reading from or writing to the key-value store.
    #[error("storage error: {0}")]
    Storage(String),

    /// Errors when serializing or deserializing persisted state.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalendarError {
    /// Build a [`CalendarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CalendarError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`CalendarError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
