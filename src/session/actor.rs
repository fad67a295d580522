//! Player actor and goal.

use crate::hex::{GridPos, HexLayout};

/// The player character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub grid: GridPos,
    pub target: GridPos,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub is_moving: bool,
    pub facing_right: bool,
}

impl Actor {
    /// Idle actor snapped to the center of `pos`.
    pub fn at(pos: GridPos, layout: &HexLayout) -> Self {
        let (pixel_x, pixel_y) = layout.hex_to_pixel(pos);
        Self {
            grid: pos,
            target: pos,
            pixel_x,
            pixel_y,
            is_moving: false,
            facing_right: true,
        }
    }

    /// Put the actor on `pos` immediately, cancelling any movement.
    pub fn teleport(&mut self, pos: GridPos, layout: &HexLayout) {
        self.grid = pos;
        self.target = pos;
        self.is_moving = false;
        self.snap(layout);
    }

    pub(crate) fn snap(&mut self, layout: &HexLayout) {
        let (x, y) = layout.hex_to_pixel(self.grid);
        self.pixel_x = x;
        self.pixel_y = y;
    }
}

/// The goal tile. Its grid position never changes after placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub grid: GridPos,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

impl Goal {
    pub fn at(pos: GridPos, layout: &HexLayout) -> Self {
        let mut goal = Self {
            grid: pos,
            pixel_x: 0.0,
            pixel_y: 0.0,
        };
        goal.sync(layout);
        goal
    }

    /// Recompute the pixel position from the grid position.
    pub fn sync(&mut self, layout: &HexLayout) {
        let (x, y) = layout.hex_to_pixel(self.grid);
        self.pixel_x = x;
        self.pixel_y = y;
    }
}
