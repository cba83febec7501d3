//! Door placement and its persistence.

pub(crate) mod cache;
pub(crate) mod generator;
pub(crate) mod model;
pub(crate) mod store;
