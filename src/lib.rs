//! HexQuest - hex-grid learning adventure
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod core;
pub mod grid;
pub mod hex;
pub mod quiz;
pub mod session;
pub mod utils;

// UI module is not exposed as it's tightly coupled to the terminal
