//! Run-wide state, configuration and tuning constants.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod game_state;

pub use config::*;
pub use constants::*;
pub use game_state::*;
