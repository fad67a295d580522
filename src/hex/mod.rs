//! Hex coordinate system: pixel conversion, adjacency and viewport fitting.

pub mod layout;

pub use layout::{are_adjacent, GridPos, HexDirection, HexLayout, ViewportFit};
