//! End-to-end session scenarios: movement, questions, hazards, goal, restart.

use hexquest::core::config::GameConfig;
use hexquest::core::constants::{
    DEFEAT_RESTART_DELAY_MS, FRAME_MS, NEXT_QUESTION_DELAY_MS, QUESTION_CLOSE_DELAY_MS,
    VICTORY_RESTART_DELAY_MS,
};
use hexquest::core::game_state::GameStatus;
use hexquest::grid::{Grid, TileKind, World};
use hexquest::hex::{GridPos, HexDirection};
use hexquest::quiz::{Answer, AnswerOutcome, Difficulty, GradeLevel, Subject};
use hexquest::session::{
    GameSession, MoveRejection, MoveRequest, SessionEvent, SessionSettings,
};

fn config() -> GameConfig {
    GameConfig {
        grade: GradeLevel::Second,
        subject: Subject::Addition,
    }
}

/// All-normal 12x20 board with the actor at (5,5) and the goal far away.
fn open_world() -> World {
    World {
        grid: Grid::new(12, 20),
        actor_start: GridPos::new(5, 5),
        goal: GridPos::new(0, 0),
    }
}

fn start(world: World) -> GameSession {
    let mut session = GameSession::new(config(), SessionSettings::default(), Some(2024));
    assert!(session.start_run_with(world));
    session
}

fn click(session: &mut GameSession, pos: GridPos, now: u64) -> MoveRequest {
    let (x, y) = session.layout().hex_to_pixel(pos);
    session.handle_click(x, y, now)
}

/// Run frames until the actor stops moving.
fn settle(session: &mut GameSession, now: &mut u64) {
    for _ in 0..500 {
        *now += FRAME_MS;
        session.update(*now);
        if !session.actor().is_moving {
            return;
        }
    }
    panic!("actor never settled");
}

fn right_answer(session: &GameSession) -> String {
    match &session.question().expect("question should be open").answer {
        Answer::Numeric(n) => n.to_string(),
        Answer::Text(t) => t.clone(),
    }
}

fn wrong_answer(session: &GameSession) -> String {
    match &session.question().expect("question should be open").answer {
        Answer::Numeric(n) => (n + 1).to_string(),
        Answer::Text(_) => "definitely wrong".to_string(),
    }
}

#[test]
fn test_challenge_tile_scenario() {
    let mut world = open_world();
    let challenge = GridPos::new(6, 5);
    world.grid.set_kind(challenge, TileKind::Challenge);
    let mut session = start(world);
    let mut now = 1_000;

    assert_eq!(click(&mut session, challenge, now), MoveRequest::Accepted);
    assert!(session.actor().is_moving);
    settle(&mut session, &mut now);

    assert_eq!(session.actor().grid, challenge);
    assert_eq!(session.status(), GameStatus::Question);
    assert!(session.question_prompt().is_some());
    assert!(session.quiz().answered_tiles.is_empty());

    let answer = right_answer(&session);
    assert_eq!(
        session.submit_answer(&format!("  {}  ", answer), now),
        AnswerOutcome::Correct { reward: 10 }
    );
    assert!(session.quiz().answered_tiles.contains(&challenge));
    assert_eq!(session.score(), 10);

    session.update(now + QUESTION_CLOSE_DELAY_MS);
    assert_eq!(session.status(), GameStatus::Running);

    // Resolved tiles never trigger again.
    let mut now = now + QUESTION_CLOSE_DELAY_MS;
    assert_eq!(click(&mut session, GridPos::new(5, 5), now), MoveRequest::Accepted);
    settle(&mut session, &mut now);
    now += 500;
    assert_eq!(click(&mut session, challenge, now), MoveRequest::Accepted);
    settle(&mut session, &mut now);
    assert_eq!(session.status(), GameStatus::Running);
}

#[test]
fn test_adaptive_difficulty_steps_down() {
    let mut world = open_world();
    // Row 2 of 20 is in the hard band.
    world.actor_start = GridPos::new(4, 3);
    let tile = GridPos::new(4, 2);
    world.grid.set_kind(tile, TileKind::Challenge);
    let mut session = start(world);
    let mut now = 0;

    click(&mut session, tile, now);
    settle(&mut session, &mut now);
    assert_eq!(session.question().map(|q| q.difficulty), Some(Difficulty::Hard));

    let wrong = wrong_answer(&session);
    assert_eq!(
        session.submit_answer(&wrong, now),
        AnswerOutcome::Wrong { next_difficulty: Difficulty::Medium }
    );
    now += NEXT_QUESTION_DELAY_MS;
    session.update(now);
    assert_eq!(session.question().map(|q| q.difficulty), Some(Difficulty::Medium));

    let wrong = wrong_answer(&session);
    session.submit_answer(&wrong, now);
    now += NEXT_QUESTION_DELAY_MS;
    session.update(now);
    assert_eq!(session.question().map(|q| q.difficulty), Some(Difficulty::Easy));
    assert_eq!(session.quiz().wrong_answer_count, 2);
    assert!(session.quiz().answered_tiles.is_empty());
    assert_eq!(session.status(), GameStatus::Question);
}

#[test]
fn test_malformed_numeric_answer_is_wrong() {
    let mut world = open_world();
    world.grid.set_kind(GridPos::new(6, 5), TileKind::Challenge);
    let mut session = start(world);
    let mut now = 0;
    click(&mut session, GridPos::new(6, 5), now);
    settle(&mut session, &mut now);

    assert!(matches!(
        session.submit_answer("twelve", now),
        AnswerOutcome::Wrong { .. }
    ));
    assert_eq!(session.score(), 0);
}

/// One column: safe, lava, goal. Every step from a safe tile lands in lava.
fn lava_corridor() -> World {
    let mut grid = Grid::new(1, 3);
    grid.set_kind(GridPos::new(0, 1), TileKind::Hazard);
    World {
        grid,
        actor_start: GridPos::new(0, 0),
        goal: GridPos::new(0, 2),
    }
}

#[test]
fn test_last_life_hazard_is_defeat() {
    let lava = GridPos::new(0, 1);
    let mut session = start(lava_corridor());
    let mut now = 0;

    for expected_lives in [2, 1] {
        assert_eq!(click(&mut session, lava, now), MoveRequest::Accepted);
        settle(&mut session, &mut now);
        assert_eq!(session.lives(), expected_lives);
        assert_eq!(session.status(), GameStatus::Running);
        assert_ne!(session.actor().grid, lava);
        assert!(session.notice().is_some());
        now += 1_000;
    }

    assert_eq!(click(&mut session, lava, now), MoveRequest::Accepted);
    settle(&mut session, &mut now);
    assert_eq!(session.lives(), 0);
    assert_eq!(session.status(), GameStatus::Defeat);
    assert_eq!(session.end_message().map(|m| m.title), Some("Game Over!"));
    assert!(session.drain_events().contains(&SessionEvent::Defeat));

    session.update(now + DEFEAT_RESTART_DELAY_MS - 1);
    assert_eq!(session.status(), GameStatus::Defeat);
    session.update(now + DEFEAT_RESTART_DELAY_MS);
    assert_eq!(session.status(), GameStatus::Title);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_goal_wins_regardless_of_tile_kind() {
    let mut world = open_world();
    let goal = GridPos::new(5, 6);
    world.goal = goal;
    world.grid.set_kind(goal, TileKind::Hazard);
    let mut session = start(world);
    let mut now = 0;

    assert_eq!(session.handle_step(HexDirection::South, now), MoveRequest::Accepted);
    settle(&mut session, &mut now);

    assert_eq!(session.status(), GameStatus::Victory);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.end_message().map(|m| m.title), Some("Victory!"));

    session.update(now + VICTORY_RESTART_DELAY_MS);
    assert_eq!(session.status(), GameStatus::Title);
}

#[test]
fn test_stale_restart_timer_is_dropped() {
    let mut world = open_world();
    world.goal = GridPos::new(5, 6);
    let mut session = start(world);
    let mut now = 0;
    session.handle_step(HexDirection::South, now);
    settle(&mut session, &mut now);
    assert_eq!(session.status(), GameStatus::Victory);

    // Restart by hand before the victory timer fires, then start a new run.
    session.restart();
    assert!(session.start_run());
    assert_eq!(session.pending_timers(), 0);

    session.update(now + VICTORY_RESTART_DELAY_MS * 2);
    assert_eq!(session.status(), GameStatus::Running);
}

#[test]
fn test_moves_ignored_while_question_open() {
    let mut world = open_world();
    world.grid.set_kind(GridPos::new(6, 5), TileKind::Challenge);
    let mut session = start(world);
    let mut now = 0;
    click(&mut session, GridPos::new(6, 5), now);
    settle(&mut session, &mut now);
    assert_eq!(session.status(), GameStatus::Question);

    now += 1_000;
    assert_eq!(
        click(&mut session, GridPos::new(6, 6), now),
        MoveRequest::Rejected(MoveRejection::NotRunning)
    );
    assert_eq!(
        session.handle_step(HexDirection::South, now),
        MoveRequest::Rejected(MoveRejection::NotRunning)
    );
    assert!(!session.toggle_pause());
}

#[test]
fn test_rate_limit_and_adjacency_via_clicks() {
    let mut session = start(open_world());
    let mut now = 5_000;
    assert_eq!(
        click(&mut session, GridPos::new(7, 5), now),
        MoveRequest::Rejected(MoveRejection::NotAdjacent)
    );
    assert_eq!(click(&mut session, GridPos::new(5, 6), now), MoveRequest::Accepted);
    assert_eq!(
        click(&mut session, GridPos::new(5, 7), now + 10),
        MoveRequest::Rejected(MoveRejection::AlreadyMoving)
    );
    settle(&mut session, &mut now);
    assert_eq!(session.actor().grid, GridPos::new(5, 6));
}

#[test]
fn test_events_trace_a_question_round() {
    let mut world = open_world();
    world.grid.set_kind(GridPos::new(6, 5), TileKind::Challenge);
    world.grid.set_bonus(GridPos::new(6, 5), true);
    let mut session = start(world);
    session.drain_events();
    let mut now = 0;

    click(&mut session, GridPos::new(6, 5), now);
    settle(&mut session, &mut now);
    let answer = right_answer(&session);
    session.submit_answer(&answer, now);
    session.update(now + QUESTION_CLOSE_DELAY_MS);

    let events = session.drain_events();
    assert!(events.contains(&SessionEvent::BonusCollected(GridPos::new(6, 5))));
    assert!(events.contains(&SessionEvent::QuestionIssued {
        tile: GridPos::new(6, 5),
        difficulty: Difficulty::Hard,
    }));
    assert!(events.contains(&SessionEvent::AnswerCorrect {
        tile: GridPos::new(6, 5),
        score: 20,
    }));
    assert_eq!(events.last(), Some(&SessionEvent::QuestionClosed));
    assert!(session.drain_events().is_empty());
}
