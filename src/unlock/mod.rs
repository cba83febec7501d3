//! Date gating for doors.

pub(crate) mod clock;
pub(crate) mod message;
pub(crate) mod policy;
