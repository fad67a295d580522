//! Per-frame update and draw ordering.
//!
//! `Continuous` frames always update and draw (title screen, overlays).
//! `Gameplay` frames only move and draw while a run is live and not paused;
//! skipped frames still fire due timers so restarts and notices resolve.

use std::collections::HashSet;

use super::actor::{Actor, Goal};
use super::game_session::GameSession;
use crate::grid::Grid;
use crate::hex::{GridPos, HexLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Continuous,
    Gameplay,
}

/// Owned snapshot of everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct DrawState {
    pub viewport: (f64, f64),
    pub layout: HexLayout,
    pub grid: Grid,
    /// Challenge tiles already answered correctly.
    pub answered_tiles: HashSet<GridPos>,
    pub actor: Actor,
    pub goal: Goal,
}

impl DrawState {
    pub fn capture(session: &GameSession) -> Self {
        Self {
            viewport: session.viewport(),
            layout: *session.layout(),
            grid: session.grid().clone(),
            answered_tiles: session.quiz().answered_tiles.clone(),
            actor: *session.actor(),
            goal: *session.goal(),
        }
    }
}

/// Drawing backend. Called in a fixed order each frame.
pub trait Renderer {
    fn draw_background(&mut self, state: &DrawState);
    fn draw_grid(&mut self, state: &DrawState);
    fn draw_goal(&mut self, state: &DrawState);
    fn draw_actor(&mut self, state: &DrawState);
}

/// Advance the session one frame and snapshot it for drawing.
///
/// Returns `None` when a `Gameplay` frame is skipped.
pub fn frame(session: &mut GameSession, mode: LoopMode, now_ms: u64) -> Option<DrawState> {
    if mode == LoopMode::Gameplay && !session.status().is_live() {
        session.fire_due_timers(now_ms);
        return None;
    }
    session.update(now_ms);
    Some(DrawState::capture(session))
}

/// Background, grid, goal, then actor so the actor stays on top.
pub fn paint<R: Renderer>(state: &DrawState, renderer: &mut R) {
    renderer.draw_background(state);
    renderer.draw_grid(state);
    renderer.draw_goal(state);
    renderer.draw_actor(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::constants::{FRAME_MS, VICTORY_RESTART_DELAY_MS};
    use crate::core::game_state::GameStatus;
    use crate::grid::World;
    use crate::hex::HexDirection;
    use crate::session::game_session::SessionSettings;
    use crate::session::movement::MoveRequest;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl Renderer for Recorder {
        fn draw_background(&mut self, _: &DrawState) {
            self.calls.push("background");
        }
        fn draw_grid(&mut self, _: &DrawState) {
            self.calls.push("grid");
        }
        fn draw_goal(&mut self, _: &DrawState) {
            self.calls.push("goal");
        }
        fn draw_actor(&mut self, _: &DrawState) {
            self.calls.push("actor");
        }
    }

    #[test]
    fn test_paint_order() {
        let session = GameSession::new(GameConfig::default(), SessionSettings::default(), Some(5));
        let mut recorder = Recorder::default();
        paint(&DrawState::capture(&session), &mut recorder);
        assert_eq!(recorder.calls, vec!["background", "grid", "goal", "actor"]);
    }

    #[test]
    fn test_gameplay_frames_skip_outside_a_run() {
        let mut session =
            GameSession::new(GameConfig::default(), SessionSettings::default(), Some(5));
        assert!(frame(&mut session, LoopMode::Gameplay, 0).is_none());
        assert!(frame(&mut session, LoopMode::Continuous, 0).is_some());

        session.start_run();
        assert!(frame(&mut session, LoopMode::Gameplay, 16).is_some());
        session.toggle_pause();
        assert_eq!(session.status(), GameStatus::Paused);
        assert!(frame(&mut session, LoopMode::Gameplay, 32).is_none());
    }

    #[test]
    fn test_skipped_gameplay_frames_still_fire_restart() {
        let world = World {
            grid: Grid::new(1, 2),
            actor_start: GridPos::new(0, 0),
            goal: GridPos::new(0, 1),
        };
        let mut session =
            GameSession::new(GameConfig::default(), SessionSettings::default(), Some(5));
        assert!(session.start_run_with(world));
        assert_eq!(session.handle_step(HexDirection::South, 0), MoveRequest::Accepted);

        let mut now = 0;
        while session.status() == GameStatus::Running {
            now += FRAME_MS;
            assert!(now < 10_000, "goal never reached");
            frame(&mut session, LoopMode::Gameplay, now);
        }
        assert_eq!(session.status(), GameStatus::Victory);

        assert!(frame(&mut session, LoopMode::Gameplay, now + VICTORY_RESTART_DELAY_MS).is_none());
        assert_eq!(session.status(), GameStatus::Title);
    }
}
