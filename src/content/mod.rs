//! Static per-day content and the page metadata derived from it.

pub(crate) mod meta;
pub(crate) mod registry;
