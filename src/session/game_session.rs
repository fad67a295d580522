//! The game session: one aggregate owning grid, actor, quiz and run state.
//!
//! All mutation goes through `&mut GameSession` from either the frame path
//! (`update`) or the input path (`handle_click`, `submit_answer`, ...).
//! Time is a caller-supplied millisecond clock.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::actor::{Actor, Goal};
use super::movement::{tile_effect, MoveRejection, MoveRequest, MovementController, TileEffect};
use super::scheduler::Scheduler;
use crate::core::config::GameConfig;
use crate::core::constants::{
    BONUS_REWARD, DEFEAT_RESTART_DELAY_MS, HAZARD_FEEDBACK_MS, MOVE_DELAY_MS, MOVE_SPEED_PX,
    NEXT_QUESTION_DELAY_MS, QUESTION_CLOSE_DELAY_MS, VICTORY_RESTART_DELAY_MS,
};
use crate::core::game_state::{GameState, GameStatus};
use crate::grid::{find_non_hazard_tile, generate_world, Grid, GridSettings, TileKind, World};
use crate::hex::{GridPos, HexDirection, HexLayout, ViewportFit};
use crate::quiz::{
    difficulty_for_row, AnswerKind, AnswerOutcome, Difficulty, Question, QuestionEngine,
};

/// Actions fired later by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedAction {
    /// Close the question modal after a correct answer.
    CloseQuestion,
    /// Replace the question after a wrong answer.
    NextQuestion,
    /// Clear the notice, if it is still the one with this generation.
    ClearNotice(u64),
    Restart,
}

/// Things that happened, drained by the UI each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RunStarted,
    MoveAccepted { from: GridPos, to: GridPos },
    Arrived(GridPos),
    BonusCollected(GridPos),
    QuestionIssued { tile: GridPos, difficulty: Difficulty },
    AnswerCorrect { tile: GridPos, score: u32 },
    AnswerWrong { next_difficulty: Difficulty },
    QuestionClosed,
    HazardHit { lives_left: u32, respawn: Option<GridPos> },
    Victory,
    Defeat,
    Paused(bool),
    Restarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Positive,
    Negative,
}

/// Feedback line shown under the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: FeedbackTone,
}

/// Terminal message for victory or defeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndMessage {
    pub title: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub grid: GridSettings,
    pub move_speed: f64,
    pub move_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            move_speed: MOVE_SPEED_PX,
            move_delay_ms: MOVE_DELAY_MS,
        }
    }
}

pub struct GameSession {
    settings: SessionSettings,
    layout: HexLayout,
    viewport: (f64, f64),
    fit: ViewportFit,
    grid: Grid,
    actor_start: GridPos,
    goal: Goal,
    movement: MovementController,
    quiz: QuestionEngine,
    state: GameState,
    scheduler: Scheduler<TimedAction>,
    /// A delayed question action is pending; answers are ignored until it fires.
    answer_locked: bool,
    feedback: Option<Feedback>,
    notice: Option<String>,
    /// Bumped each time a notice is shown so older clear timers are ignored.
    notice_generation: u64,
    end_message: Option<EndMessage>,
    events: Vec<SessionEvent>,
    rng: StdRng,
}

impl GameSession {
    /// New session on the title screen. `seed` makes generation reproducible.
    pub fn new(config: GameConfig, settings: SessionSettings, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let world = generate_world(&settings.grid, &mut rng);
        Self::assemble(config, settings, world, rng)
    }

    fn assemble(config: GameConfig, settings: SessionSettings, world: World, rng: StdRng) -> Self {
        let viewport = (400.0, 700.0);
        let fit = ViewportFit::default();
        let mut layout = HexLayout::new(world.grid.cols(), world.grid.rows());
        layout.fit_to_viewport(viewport.0, viewport.1, fit);
        let mut movement = MovementController::new(world.actor_start, &layout);
        movement.speed = settings.move_speed;
        movement.move_delay_ms = settings.move_delay_ms;

        Self {
            goal: Goal::at(world.goal, &layout),
            actor_start: world.actor_start,
            grid: world.grid,
            movement,
            layout,
            viewport,
            fit,
            settings,
            quiz: QuestionEngine::new(),
            state: GameState::new(config),
            scheduler: Scheduler::new(),
            answer_locked: false,
            feedback: None,
            notice: None,
            notice_generation: 0,
            end_message: None,
            events: Vec::new(),
            rng,
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Title -> Running with a freshly generated world.
    pub fn start_run(&mut self) -> bool {
        if self.state.status != GameStatus::Title {
            return false;
        }
        let world = generate_world(&self.settings.grid, &mut self.rng);
        self.start_run_with(world)
    }

    /// Title -> Running on a prepared world. Later restarts generate normally.
    pub fn start_run_with(&mut self, world: World) -> bool {
        if self.state.status != GameStatus::Title {
            return false;
        }
        self.install_world(world);
        self.state.status = GameStatus::Running;
        log::info!(
            "run started: {} / {}",
            self.state.config.grade,
            self.state.config.subject.name()
        );
        self.events.push(SessionEvent::RunStarted);
        true
    }

    /// Start over on the title screen with a new world.
    pub fn restart(&mut self) {
        let world = generate_world(&self.settings.grid, &mut self.rng);
        self.install_world(world);
        self.state.status = GameStatus::Title;
        log::info!("session restarted (id {})", self.scheduler.session_id());
        self.events.push(SessionEvent::Restarted);
    }

    fn install_world(&mut self, world: World) {
        self.scheduler.begin_session();
        self.layout.cols = world.grid.cols();
        self.layout.rows = world.grid.rows();
        self.layout
            .fit_to_viewport(self.viewport.0, self.viewport.1, self.fit);
        self.grid = world.grid;
        self.actor_start = world.actor_start;
        self.goal = Goal::at(world.goal, &self.layout);
        self.movement.reset(world.actor_start, &self.layout);
        self.quiz.reset();
        self.state.reset_counters();
        self.answer_locked = false;
        self.feedback = None;
        self.notice = None;
        self.end_message = None;
    }

    pub fn toggle_pause(&mut self) -> bool {
        let changed = self.state.toggle_pause();
        if changed {
            let paused = self.state.paused();
            log::debug!("paused: {}", paused);
            self.events.push(SessionEvent::Paused(paused));
        }
        changed
    }

    /// Change grade/subject. Only allowed on the title screen.
    pub fn set_config(&mut self, config: GameConfig) -> bool {
        if self.state.status != GameStatus::Title {
            return false;
        }
        self.state.config = config;
        true
    }

    /// Fit the grid to a new drawing area.
    pub fn resize(&mut self, width: f64, height: f64, fit: ViewportFit) {
        self.viewport = (width, height);
        self.fit = fit;
        self.layout.fit_to_viewport(width, height, fit);
        self.goal.sync(&self.layout);
    }

    pub fn set_move_speed(&mut self, speed: f64) {
        self.settings.move_speed = speed;
        self.movement.speed = speed;
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Pointer input in pixel coordinates.
    pub fn handle_click(&mut self, x: f64, y: f64, now_ms: u64) -> MoveRequest {
        let target = self.layout.pixel_to_hex(x, y);
        self.request_move(target, now_ms)
    }

    /// Keyboard input: one step in a hex direction.
    pub fn handle_step(&mut self, direction: HexDirection, now_ms: u64) -> MoveRequest {
        match self.layout.step(self.movement.position(), direction) {
            Some(target) => self.request_move(target, now_ms),
            None => MoveRequest::Rejected(MoveRejection::OutOfGrid),
        }
    }

    fn request_move(&mut self, target: GridPos, now_ms: u64) -> MoveRequest {
        if self.state.status != GameStatus::Running {
            return MoveRequest::Rejected(MoveRejection::NotRunning);
        }
        let from = self.movement.position();
        let request = self.movement.request_move(target, &self.layout, now_ms);
        match request {
            MoveRequest::Accepted => {
                self.events.push(SessionEvent::MoveAccepted { from, to: target });
                if self.grid.take_bonus(target) {
                    self.state.score += BONUS_REWARD;
                    log::debug!("bonus at ({}, {})", target.col, target.row);
                    self.events.push(SessionEvent::BonusCollected(target));
                }
            }
            MoveRequest::Rejected(reason) => {
                log::trace!("move to ({}, {}) ignored: {:?}", target.col, target.row, reason);
            }
        }
        request
    }

    /// Submit an answer to the open question.
    pub fn submit_answer(&mut self, raw_input: &str, now_ms: u64) -> AnswerOutcome {
        if self.state.status != GameStatus::Question || self.answer_locked {
            return AnswerOutcome::NoQuestion;
        }
        let previous = self.quiz.current_difficulty;
        let tile = self.quiz.origin;
        let outcome = self.quiz.submit(raw_input);

        match outcome {
            AnswerOutcome::Correct { reward } => {
                self.state.score += reward;
                self.feedback = Some(Feedback {
                    text: "Correct! Great job!".to_string(),
                    tone: FeedbackTone::Positive,
                });
                self.answer_locked = true;
                self.scheduler
                    .schedule(now_ms, QUESTION_CLOSE_DELAY_MS, TimedAction::CloseQuestion);
                if let Some(tile) = tile {
                    log::info!("tile ({}, {}) resolved, score {}", tile.col, tile.row, self.state.score);
                    self.events.push(SessionEvent::AnswerCorrect {
                        tile,
                        score: self.state.score,
                    });
                }
            }
            AnswerOutcome::Wrong { next_difficulty } => {
                let text = match (previous, next_difficulty) {
                    (Difficulty::Hard, Difficulty::Medium) => "Let's try an easier one!",
                    (Difficulty::Medium, Difficulty::Easy) => "Here's an easier question!",
                    _ => "Try again!",
                };
                self.feedback = Some(Feedback {
                    text: text.to_string(),
                    tone: FeedbackTone::Negative,
                });
                self.answer_locked = true;
                self.scheduler
                    .schedule(now_ms, NEXT_QUESTION_DELAY_MS, TimedAction::NextQuestion);
                log::debug!("wrong answer, next difficulty {:?}", next_difficulty);
                self.events.push(SessionEvent::AnswerWrong { next_difficulty });
            }
            AnswerOutcome::NoQuestion => {}
        }
        outcome
    }

    // ── Frame update ────────────────────────────────────────────────

    /// Fire due timers, then advance movement one frame.
    pub fn update(&mut self, now_ms: u64) {
        self.fire_due_timers(now_ms);

        self.goal.sync(&self.layout);
        let live = self.state.status.is_live();
        if live || !self.movement.is_moving() {
            if let Some(pos) = self.movement.tick(&self.layout) {
                self.events.push(SessionEvent::Arrived(pos));
                self.resolve_arrival(pos, now_ms);
            }
        }
    }

    /// Run scheduled actions whose deadline has passed, without moving anything.
    pub fn fire_due_timers(&mut self, now_ms: u64) {
        for action in self.scheduler.drain_due(now_ms) {
            self.apply_timed(action);
        }
    }

    fn apply_timed(&mut self, action: TimedAction) {
        match action {
            TimedAction::CloseQuestion => {
                self.quiz.close();
                self.feedback = None;
                self.answer_locked = false;
                if self.state.status == GameStatus::Question {
                    self.state.status = GameStatus::Running;
                }
                self.events.push(SessionEvent::QuestionClosed);
            }
            TimedAction::NextQuestion => {
                self.feedback = None;
                self.answer_locked = false;
                let tile = self.quiz.origin;
                if let (Some(question), Some(tile)) =
                    (self.quiz.reissue(&self.state.config, &mut self.rng), tile)
                {
                    let difficulty = question.difficulty;
                    self.events
                        .push(SessionEvent::QuestionIssued { tile, difficulty });
                }
            }
            TimedAction::ClearNotice(generation) => {
                if generation == self.notice_generation {
                    self.notice = None;
                }
            }
            TimedAction::Restart => self.restart(),
        }
    }

    /// Apply tile effects in order: goal, hazard, challenge.
    fn resolve_arrival(&mut self, pos: GridPos, now_ms: u64) {
        let effect = tile_effect(pos, self.goal.grid, &self.grid, |p| {
            self.quiz.should_trigger(p)
        });

        match effect {
            TileEffect::ReachedGoal => self.victory(now_ms),
            TileEffect::Hazard => self.hit_hazard(now_ms),
            TileEffect::Challenge => self.open_question(pos),
            TileEffect::Nothing => {}
        }
    }

    fn hit_hazard(&mut self, now_ms: u64) {
        if self.state.lose_life() {
            self.events.push(SessionEvent::HazardHit {
                lives_left: 0,
                respawn: None,
            });
            self.defeat(now_ms);
            return;
        }

        let respawn = find_non_hazard_tile(
            &self.grid,
            &mut self.rng,
            self.settings.grid.max_placement_attempts,
        )
        .unwrap_or(self.actor_start);
        self.movement.relocate(respawn, &self.layout);
        self.notice = Some(format!(
            "Ouch! Fell into lava. Lives remaining: {}",
            self.state.lives
        ));
        self.notice_generation += 1;
        self.scheduler.schedule(
            now_ms,
            HAZARD_FEEDBACK_MS,
            TimedAction::ClearNotice(self.notice_generation),
        );
        log::info!(
            "hazard hit, {} lives left, respawn at ({}, {})",
            self.state.lives,
            respawn.col,
            respawn.row
        );
        self.events.push(SessionEvent::HazardHit {
            lives_left: self.state.lives,
            respawn: Some(respawn),
        });

        // The respawn tile may itself hold an unresolved challenge.
        if self.grid.kind_at(respawn) == TileKind::Challenge && self.quiz.should_trigger(respawn) {
            self.open_question(respawn);
        }
    }

    fn open_question(&mut self, tile: GridPos) {
        let difficulty = difficulty_for_row(tile.row, self.grid.rows());
        self.quiz
            .ask(tile, difficulty, &self.state.config, &mut self.rng);
        self.state.status = GameStatus::Question;
        self.feedback = None;
        self.answer_locked = false;
        log::debug!("question at ({}, {}), {:?}", tile.col, tile.row, difficulty);
        self.events
            .push(SessionEvent::QuestionIssued { tile, difficulty });
    }

    fn victory(&mut self, now_ms: u64) {
        self.state.status = GameStatus::Victory;
        self.quiz.close();
        self.end_message = Some(EndMessage {
            title: "Victory!",
            body: "The hero saved the princess!".to_string(),
        });
        self.scheduler
            .schedule(now_ms, VICTORY_RESTART_DELAY_MS, TimedAction::Restart);
        log::info!("victory with score {}", self.state.score);
        self.events.push(SessionEvent::Victory);
    }

    fn defeat(&mut self, now_ms: u64) {
        self.state.status = GameStatus::Defeat;
        self.quiz.close();
        self.end_message = Some(EndMessage {
            title: "Game Over!",
            body: "The hero fell into the lava!".to_string(),
        });
        self.scheduler
            .schedule(now_ms, DEFEAT_RESTART_DELAY_MS, TimedAction::Restart);
        log::info!("defeat with score {}", self.state.score);
        self.events.push(SessionEvent::Defeat);
    }

    // ── Observable state ────────────────────────────────────────────

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    pub fn actor(&self) -> &Actor {
        self.movement.actor()
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn question(&self) -> Option<&Question> {
        self.quiz.current.as_ref()
    }

    pub fn question_prompt(&self) -> Option<&str> {
        self.question().map(|q| q.prompt.as_str())
    }

    pub fn answer_kind(&self) -> Option<AnswerKind> {
        self.question().map(Question::answer_kind)
    }

    pub fn quiz(&self) -> &QuestionEngine {
        &self.quiz
    }

    pub fn is_answer_locked(&self) -> bool {
        self.answer_locked
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn end_message(&self) -> Option<&EndMessage> {
        self.end_message.as_ref()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
