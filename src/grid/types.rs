//! Tile grid data structures.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    BARRIER_GAP_COLS, BARRIER_HAZARD_CHANCE, BARRIER_ROWS, BONUS_CHANCE, DEFAULT_COLS,
    DEFAULT_ROWS, FIELD_HAZARD_CHANCE, FORCED_BARRIER_ROW, MAX_PLACEMENT_ATTEMPTS,
    NORTH_CHALLENGE_CHANCE, SOUTH_CHALLENGE_CHANCE,
};
use crate::hex::GridPos;

/// What happens when the actor lands on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Normal,
    Hazard,
    Challenge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub kind: TileKind,
    /// Collectible coin; cleared once picked up.
    pub has_bonus: bool,
}

impl Tile {
    pub fn pos(&self) -> GridPos {
        GridPos::new(self.col, self.row)
    }
}

/// Rows x cols tile grid, indexed as `tiles[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// All-normal grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        let tiles = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| Tile {
                        row,
                        col,
                        kind: TileKind::Normal,
                        has_bonus: false,
                    })
                    .collect()
            })
            .collect();
        Self { tiles, cols, rows }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, pos: GridPos) -> Option<&Tile> {
        self.tiles.get(pos.row)?.get(pos.col)
    }

    pub(crate) fn get_mut(&mut self, pos: GridPos) -> Option<&mut Tile> {
        self.tiles.get_mut(pos.row)?.get_mut(pos.col)
    }

    /// Kind at a position; off-grid positions read as `Normal`.
    pub fn kind_at(&self, pos: GridPos) -> TileKind {
        self.get(pos).map(|t| t.kind).unwrap_or_default()
    }

    pub fn set_kind(&mut self, pos: GridPos, kind: TileKind) {
        if let Some(tile) = self.get_mut(pos) {
            tile.kind = kind;
        }
    }

    pub fn set_bonus(&mut self, pos: GridPos, has_bonus: bool) {
        if let Some(tile) = self.get_mut(pos) {
            tile.has_bonus = has_bonus;
        }
    }

    /// Clear a bonus coin. Returns true if there was one.
    pub fn take_bonus(&mut self, pos: GridPos) -> bool {
        match self.get_mut(pos) {
            Some(tile) if tile.has_bonus => {
                tile.has_bonus = false;
                true
            }
            _ => false,
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles().filter(|t| t.kind == kind).count()
    }
}

/// Tuning for procedural generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    pub cols: usize,
    pub rows: usize,
    pub barrier_rows: Vec<usize>,
    /// Barrier row filled entirely with challenge tiles.
    pub forced_barrier_row: usize,
    pub gap_cols: Vec<usize>,
    pub barrier_hazard_chance: f64,
    pub field_hazard_chance: f64,
    pub north_challenge_chance: f64,
    pub south_challenge_chance: f64,
    pub bonus_chance: f64,
    pub max_placement_attempts: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            barrier_rows: BARRIER_ROWS.to_vec(),
            forced_barrier_row: FORCED_BARRIER_ROW,
            gap_cols: BARRIER_GAP_COLS.to_vec(),
            barrier_hazard_chance: BARRIER_HAZARD_CHANCE,
            field_hazard_chance: FIELD_HAZARD_CHANCE,
            north_challenge_chance: NORTH_CHALLENGE_CHANCE,
            south_challenge_chance: SOUTH_CHALLENGE_CHANCE,
            bonus_chance: BONUS_CHANCE,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GridSettings {
    pub fn is_barrier_row(&self, row: usize) -> bool {
        self.barrier_rows.contains(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_normal() {
        let grid = Grid::new(12, 20);
        assert_eq!(grid.cols(), 12);
        assert_eq!(grid.rows(), 20);
        assert_eq!(grid.count(TileKind::Normal), 240);
        let tile = grid.get(GridPos::new(3, 7)).unwrap();
        assert_eq!((tile.col, tile.row), (3, 7));
        assert_eq!(tile.pos(), GridPos::new(3, 7));
    }

    #[test]
    fn test_out_of_bounds_reads() {
        let grid = Grid::new(4, 4);
        assert!(grid.get(GridPos::new(4, 0)).is_none());
        assert_eq!(grid.kind_at(GridPos::new(9, 9)), TileKind::Normal);
    }

    #[test]
    fn test_take_bonus_once() {
        let mut grid = Grid::new(4, 4);
        let pos = GridPos::new(1, 2);
        grid.get_mut(pos).unwrap().has_bonus = true;
        assert!(grid.take_bonus(pos));
        assert!(!grid.take_bonus(pos));
    }

    #[test]
    fn test_default_settings() {
        let settings = GridSettings::default();
        assert_eq!((settings.cols, settings.rows), (12, 20));
        assert!(settings.is_barrier_row(10));
        assert!(!settings.is_barrier_row(11));
        assert!(settings.barrier_rows.contains(&settings.forced_barrier_row));
    }
}
