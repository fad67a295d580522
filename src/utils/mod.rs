//! Persistence and logging helpers.

pub mod logging;
pub mod persistence;
