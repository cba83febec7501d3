//! Calendar state machine and the pieces it drives.

pub(crate) mod calendar;
pub(crate) mod feedback;
pub(crate) mod input;
pub(crate) mod route;
pub(crate) mod timers;
