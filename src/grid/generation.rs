//! Procedural grid generation and start-tile placement.

use rand::Rng;

use super::types::{Grid, GridSettings, TileKind};
use crate::hex::GridPos;

/// A freshly generated grid with its start positions.
#[derive(Debug, Clone)]
pub struct World {
    pub grid: Grid,
    pub actor_start: GridPos,
    pub goal: GridPos,
}

/// Build a grid: all normal, then barrier rows, then the open field, then bonuses.
pub fn generate_tiles<R: Rng>(settings: &GridSettings, rng: &mut R) -> Grid {
    let mut grid = Grid::new(settings.cols, settings.rows);

    for &row in settings.barrier_rows.iter().filter(|&&r| r < settings.rows) {
        for col in 0..settings.cols {
            let pos = GridPos::new(col, row);
            let kind = if row == settings.forced_barrier_row || settings.gap_cols.contains(&col) {
                TileKind::Challenge
            } else if rng.gen_bool(settings.barrier_hazard_chance.clamp(0.0, 1.0)) {
                TileKind::Hazard
            } else {
                TileKind::Challenge
            };
            grid.set_kind(pos, kind);
        }
    }

    let northern_limit = settings.rows as f64 * 0.5;
    for row in (0..settings.rows).filter(|r| !settings.is_barrier_row(*r)) {
        let challenge_chance = if (row as f64) < northern_limit {
            settings.north_challenge_chance
        } else {
            settings.south_challenge_chance
        };
        for col in 0..settings.cols {
            let pos = GridPos::new(col, row);
            if rng.gen_bool(settings.field_hazard_chance.clamp(0.0, 1.0)) {
                grid.set_kind(pos, TileKind::Hazard);
            } else if rng.gen_bool(challenge_chance.clamp(0.0, 1.0)) {
                grid.set_kind(pos, TileKind::Challenge);
            }
        }
    }

    if settings.bonus_chance > 0.0 {
        let normal: Vec<GridPos> = grid
            .tiles()
            .filter(|t| t.kind == TileKind::Normal)
            .map(|t| t.pos())
            .collect();
        for pos in normal {
            if rng.gen_bool(settings.bonus_chance.clamp(0.0, 1.0)) {
                if let Some(tile) = grid.get_mut(pos) {
                    tile.has_bonus = true;
                }
            }
        }
    }

    grid
}

/// Find a tile matching `accept`: uniform random sampling up to `max_attempts`,
/// then a row-major scan. `None` only if no tile matches at all.
pub fn find_tile<R, F>(grid: &Grid, rng: &mut R, max_attempts: u32, accept: F) -> Option<GridPos>
where
    R: Rng,
    F: Fn(GridPos, TileKind) -> bool,
{
    if grid.cols() == 0 || grid.rows() == 0 {
        return None;
    }
    for _ in 0..max_attempts {
        let pos = GridPos::new(rng.gen_range(0..grid.cols()), rng.gen_range(0..grid.rows()));
        if accept(pos, grid.kind_at(pos)) {
            return Some(pos);
        }
    }
    log::debug!(
        "random placement gave up after {} attempts, scanning",
        max_attempts
    );
    grid.tiles()
        .map(|t| (t.pos(), t.kind))
        .find(|&(pos, kind)| accept(pos, kind))
        .map(|(pos, _)| pos)
}

/// A random non-hazard tile, used to respawn after a hazard.
pub fn find_non_hazard_tile<R: Rng>(grid: &Grid, rng: &mut R, max_attempts: u32) -> Option<GridPos> {
    find_tile(grid, rng, max_attempts, |_, kind| kind != TileKind::Hazard)
}

/// Move `current` to a normal tile other than `avoid` if it is unusable.
/// Forces a tile to normal when the grid has none left.
fn settle_on_normal<R: Rng>(
    grid: &mut Grid,
    current: GridPos,
    avoid: Option<GridPos>,
    max_attempts: u32,
    rng: &mut R,
) -> GridPos {
    let usable = |pos: GridPos, kind: TileKind| kind == TileKind::Normal && Some(pos) != avoid;
    if usable(current, grid.kind_at(current)) {
        return current;
    }
    if let Some(pos) = find_tile(grid, rng, max_attempts, usable) {
        return pos;
    }

    let forced = if Some(current) != avoid {
        Some(current)
    } else {
        grid.tiles().map(|t| t.pos()).find(|pos| Some(*pos) != avoid)
    };
    match forced {
        Some(pos) => {
            log::warn!("no normal tile left, clearing ({}, {})", pos.col, pos.row);
            grid.set_kind(pos, TileKind::Normal);
            pos
        }
        None => current,
    }
}

/// Random start tiles: actor in the southern quarter, goal in the northern quarter.
fn initial_positions<R: Rng>(settings: &GridSettings, rng: &mut R) -> (GridPos, GridPos) {
    let cols = settings.cols.max(1);
    let rows = settings.rows.max(1);
    let south_start = ((rows as f64 * 0.75).floor() as usize).min(rows - 1);
    let north_end = ((rows as f64 * 0.25).floor() as usize).max(1);

    let actor = GridPos::new(rng.gen_range(0..cols), rng.gen_range(south_start..rows));
    let goal = GridPos::new(rng.gen_range(0..cols), rng.gen_range(0..north_end));
    (actor, goal)
}

/// Generate a grid and place the actor and goal on distinct normal tiles.
pub fn generate_world<R: Rng>(settings: &GridSettings, rng: &mut R) -> World {
    let mut grid = generate_tiles(settings, rng);
    let (actor, goal) = initial_positions(settings, rng);

    let actor_start = settle_on_normal(
        &mut grid,
        actor,
        Some(goal),
        settings.max_placement_attempts,
        rng,
    );
    let goal = settle_on_normal(
        &mut grid,
        goal,
        Some(actor_start),
        settings.max_placement_attempts,
        rng,
    );

    log::debug!(
        "generated {}x{} grid: {} hazards, {} challenges, actor ({}, {}), goal ({}, {})",
        grid.cols(),
        grid.rows(),
        grid.count(TileKind::Hazard),
        grid.count(TileKind::Challenge),
        actor_start.col,
        actor_start.row,
        goal.col,
        goal.row
    );

    World {
        grid,
        actor_start,
        goal,
    }
}
