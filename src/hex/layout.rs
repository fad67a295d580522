//! Flat-top hex layout with column offset.
//!
//! Odd columns sit half a row lower than even columns. Neighbor offsets
//! depend on the parity of the source column:
//!
//! ```text
//! even col: (+1, 0) (-1, 0) (0, +1) (0, -1) (+1, -1) (-1, -1)
//! odd col:  (+1, 0) (-1, 0) (0, +1) (0, -1) (+1, +1) (-1, +1)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    COLUMN_OFFSET_MULTIPLIER, DEFAULT_COLS, DEFAULT_HEX_RADIUS, DEFAULT_ORIGIN, DEFAULT_ROWS,
    HORIZONTAL_SPACING, VERTICAL_SPACING,
};

/// Smallest radius a refit may produce, keeps conversions finite.
const MIN_RADIUS: f64 = 0.5;

/// Tile address on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

impl GridPos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    fn offset(self, d_col: i64, d_row: i64) -> (i64, i64) {
        (self.col as i64 + d_col, self.row as i64 + d_row)
    }
}

/// (d_col, d_row) neighbor offsets for even source columns.
pub const EVEN_COL_NEIGHBORS: [(i64, i64); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, -1), (-1, -1)];
/// (d_col, d_row) neighbor offsets for odd source columns.
pub const ODD_COL_NEIGHBORS: [(i64, i64); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, 1)];

fn neighbor_offsets(col: usize) -> &'static [(i64, i64); 6] {
    if col % 2 == 0 {
        &EVEN_COL_NEIGHBORS
    } else {
        &ODD_COL_NEIGHBORS
    }
}

/// Whether `b` is one of the six neighbors of `a`.
pub fn are_adjacent(a: GridPos, b: GridPos) -> bool {
    let d_col = b.col as i64 - a.col as i64;
    let d_row = b.row as i64 - a.row as i64;
    neighbor_offsets(a.col)
        .iter()
        .any(|&(dc, dr)| dc == d_col && dr == d_row)
}

/// The six flat-top step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexDirection {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::North,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::South,
        HexDirection::SouthWest,
        HexDirection::NorthWest,
    ];

    /// (d_col, d_row) for this direction from a column of the given parity.
    pub fn delta(&self, from_col: usize) -> (i64, i64) {
        let odd = from_col % 2 == 1;
        match (self, odd) {
            (Self::North, _) => (0, -1),
            (Self::South, _) => (0, 1),
            (Self::NorthEast, false) => (1, -1),
            (Self::NorthEast, true) => (1, 0),
            (Self::SouthEast, false) => (1, 0),
            (Self::SouthEast, true) => (1, 1),
            (Self::NorthWest, false) => (-1, -1),
            (Self::NorthWest, true) => (-1, 0),
            (Self::SouthWest, false) => (-1, 0),
            (Self::SouthWest, true) => (-1, 1),
        }
    }
}

/// Margins used when fitting the grid into a drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    /// Space reserved below the grid for controls.
    pub controls_height: f64,
    pub padding: f64,
    pub shift_x: f64,
    pub shift_y: f64,
}

impl Default for ViewportFit {
    fn default() -> Self {
        Self {
            controls_height: 60.0,
            padding: 10.0,
            shift_x: 20.0,
            shift_y: 40.0,
        }
    }
}

impl ViewportFit {
    /// Tight margins for small canvases such as a terminal.
    pub fn compact() -> Self {
        Self {
            controls_height: 0.0,
            padding: 2.0,
            shift_x: 0.0,
            shift_y: 0.0,
        }
    }
}

/// Geometry of the hex grid in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    pub radius: f64,
    pub cols: usize,
    pub rows: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    pub offset_multiplier: f64,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl HexLayout {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            radius: DEFAULT_HEX_RADIUS,
            cols,
            rows,
            origin_x: DEFAULT_ORIGIN.0,
            origin_y: DEFAULT_ORIGIN.1,
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
            offset_multiplier: COLUMN_OFFSET_MULTIPLIER,
        }
    }

    pub fn hex_width(&self) -> f64 {
        3f64.sqrt() * self.radius
    }

    pub fn hex_height(&self) -> f64 {
        2.0 * self.radius
    }

    /// Horizontal distance between adjacent column centers.
    pub fn col_step(&self) -> f64 {
        self.hex_width() * self.horizontal_spacing
    }

    /// Vertical distance between adjacent row centers in one column.
    pub fn row_step(&self) -> f64 {
        self.hex_height() * 0.75 * self.vertical_spacing
    }

    /// Extra vertical offset applied to odd columns.
    fn parity_offset(&self, col: i64) -> f64 {
        col.rem_euclid(2) as f64 * self.row_step() * self.offset_multiplier
    }

    pub fn contains(&self, col: i64, row: i64) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    /// Center of a tile in pixels.
    pub fn hex_to_pixel(&self, pos: GridPos) -> (f64, f64) {
        let x = pos.col as f64 * self.col_step() + self.origin_x;
        let y = pos.row as f64 * self.row_step() + self.parity_offset(pos.col as i64) + self.origin_y;
        (x, y)
    }

    /// Nearest tile to a pixel, clamped into the grid.
    pub fn pixel_to_hex(&self, x: f64, y: f64) -> GridPos {
        let local_x = x - self.origin_x;
        let local_y = y - self.origin_y;

        let col = (local_x / self.col_step()).round() as i64;
        let row = ((local_y - self.parity_offset(col)) / self.row_step()).round() as i64;

        GridPos {
            col: col.clamp(0, self.cols as i64 - 1) as usize,
            row: row.clamp(0, self.rows as i64 - 1) as usize,
        }
    }

    /// In-bounds neighbors of a tile.
    pub fn neighbors(&self, pos: GridPos) -> Vec<GridPos> {
        neighbor_offsets(pos.col)
            .iter()
            .map(|&(dc, dr)| pos.offset(dc, dr))
            .filter(|&(c, r)| self.contains(c, r))
            .map(|(c, r)| GridPos::new(c as usize, r as usize))
            .collect()
    }

    /// The neighbor in a direction, if it is on the grid.
    pub fn step(&self, pos: GridPos, direction: HexDirection) -> Option<GridPos> {
        let (dc, dr) = direction.delta(pos.col);
        let (c, r) = pos.offset(dc, dr);
        self.contains(c, r)
            .then(|| GridPos::new(c as usize, r as usize))
    }

    /// Recompute radius and origin so the grid fits a `width` x `height` area.
    ///
    /// Only the radius and origin change; spacing ratios and the parity rule
    /// stay fixed so conversion and adjacency remain consistent.
    pub fn fit_to_viewport(&mut self, width: f64, height: f64, fit: ViewportFit) {
        let cols = self.cols.max(1) as f64;
        let rows = self.rows.max(1) as f64;
        let available_width = width - fit.padding * 2.0;
        let available_height = height - fit.controls_height - fit.padding * 2.0;

        let radius_for_width = available_width / (cols * 3f64.sqrt() * self.horizontal_spacing);
        let radius_for_height =
            available_height / ((rows - 1.0) * 1.5 * self.vertical_spacing + 2.0);
        self.radius = radius_for_width.min(radius_for_height).max(MIN_RADIUS);

        let grid_width = (cols - 1.0) * self.col_step() + self.hex_width();
        let grid_height = (rows - 1.0) * self.row_step() + self.hex_height();

        self.origin_x = (width - grid_width) / 2.0 + fit.shift_x;
        self.origin_y = ((height - fit.controls_height) - grid_height) / 2.0 + fit.shift_y;
    }
}
