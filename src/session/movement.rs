//! Single-step actor movement between adjacent tiles.
//!
//! The controller is `Idle` (snapped to a tile center) or `Moving`
//! (stepping a fixed number of pixels per frame toward the target center).

use super::actor::Actor;
use crate::core::constants::{MOVE_DELAY_MS, MOVE_SPEED_PX};
use crate::grid::{Grid, TileKind};
use crate::hex::{are_adjacent, GridPos, HexLayout};

/// Why a move command was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Not in free play (title, paused, question open, or run over).
    NotRunning,
    AlreadyMoving,
    RateLimited,
    OutOfGrid,
    NotAdjacent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    Accepted,
    Rejected(MoveRejection),
}

/// What landing on a tile triggers, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEffect {
    ReachedGoal,
    Hazard,
    Challenge,
    Nothing,
}

/// First effect that applies to an arrival tile.
///
/// Goal beats tile kind; a challenge only counts while `unresolved` says so.
pub fn tile_effect(
    pos: GridPos,
    goal: GridPos,
    grid: &Grid,
    unresolved: impl Fn(GridPos) -> bool,
) -> TileEffect {
    if pos == goal {
        return TileEffect::ReachedGoal;
    }
    match grid.kind_at(pos) {
        TileKind::Hazard => TileEffect::Hazard,
        TileKind::Challenge if unresolved(pos) => TileEffect::Challenge,
        _ => TileEffect::Nothing,
    }
}

#[derive(Debug, Clone)]
pub struct MovementController {
    actor: Actor,
    /// Pixels advanced per frame.
    pub speed: f64,
    pub move_delay_ms: u64,
    last_move_ms: Option<u64>,
}

impl MovementController {
    pub fn new(start: GridPos, layout: &HexLayout) -> Self {
        Self {
            actor: Actor::at(start, layout),
            speed: MOVE_SPEED_PX,
            move_delay_ms: MOVE_DELAY_MS,
            last_move_ms: None,
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn position(&self) -> GridPos {
        self.actor.grid
    }

    pub fn is_moving(&self) -> bool {
        self.actor.is_moving
    }

    /// Try to start a move toward `target`.
    pub fn request_move(&mut self, target: GridPos, layout: &HexLayout, now_ms: u64) -> MoveRequest {
        if self.actor.is_moving {
            return MoveRequest::Rejected(MoveRejection::AlreadyMoving);
        }
        if let Some(last) = self.last_move_ms {
            if now_ms.saturating_sub(last) < self.move_delay_ms {
                return MoveRequest::Rejected(MoveRejection::RateLimited);
            }
        }
        if !layout.contains(target.col as i64, target.row as i64) {
            return MoveRequest::Rejected(MoveRejection::OutOfGrid);
        }
        if !are_adjacent(self.actor.grid, target) {
            return MoveRequest::Rejected(MoveRejection::NotAdjacent);
        }

        self.actor.target = target;
        self.actor.is_moving = true;
        self.last_move_ms = Some(now_ms);
        if target.col > self.actor.grid.col {
            self.actor.facing_right = true;
        } else if target.col < self.actor.grid.col {
            self.actor.facing_right = false;
        }
        MoveRequest::Accepted
    }

    /// Advance one frame. Returns the tile the actor arrived on, if any.
    pub fn tick(&mut self, layout: &HexLayout) -> Option<GridPos> {
        if !self.actor.is_moving {
            self.actor.snap(layout);
            return None;
        }

        let (target_x, target_y) = layout.hex_to_pixel(self.actor.target);
        let dx = target_x - self.actor.pixel_x;
        let dy = target_y - self.actor.pixel_y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance <= self.speed {
            self.actor.grid = self.actor.target;
            self.actor.pixel_x = target_x;
            self.actor.pixel_y = target_y;
            self.actor.is_moving = false;
            return Some(self.actor.grid);
        }

        self.actor.pixel_x += dx / distance * self.speed;
        self.actor.pixel_y += dy / distance * self.speed;
        None
    }

    /// Place the actor on `pos` at once (respawn after a hazard).
    pub fn relocate(&mut self, pos: GridPos, layout: &HexLayout) {
        self.actor.teleport(pos, layout);
    }

    /// Back to a fresh start on `pos`: idle, facing right, no rate limit.
    pub fn reset(&mut self, pos: GridPos, layout: &HexLayout) {
        self.actor = Actor::at(pos, layout);
        self.last_move_ms = None;
    }
}
