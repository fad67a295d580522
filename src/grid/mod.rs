//! Tile grid and its procedural generator.

pub mod generation;
pub mod types;

pub use crate::hex::GridPos;
pub use generation::{find_non_hazard_tile, find_tile, generate_tiles, generate_world, World};
pub use types::{Grid, GridSettings, Tile, TileKind};
