//! Game session: actor movement, timers, the frame loop and the aggregate
//! that ties them together.

pub mod actor;
pub mod game_session;
pub mod movement;
pub mod render_loop;
pub mod scheduler;

pub use actor::{Actor, Goal};
pub use game_session::{
    EndMessage, Feedback, FeedbackTone, GameSession, SessionEvent, SessionSettings, TimedAction,
};
pub use movement::{tile_effect, MoveRejection, MoveRequest, MovementController, TileEffect};
pub use render_loop::{frame, paint, DrawState, LoopMode, Renderer};
pub use scheduler::Scheduler;
