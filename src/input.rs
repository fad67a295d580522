//! Input handling: maps terminal key and mouse events onto the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hexquest::core::game_state::GameStatus;
use hexquest::hex::HexDirection;
use hexquest::session::{GameSession, MoveRequest};
use ratatui::layout::Rect;

use crate::ui::board_scene::cell_to_pixel;

/// Longest answer the modal accepts.
const MAX_ANSWER_LEN: usize = 24;

/// Which picker is highlighted on the title screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleField {
    Grade,
    Subject,
}

/// UI-only state that lives outside the session.
pub struct InputState {
    pub answer: String,
    pub title_field: TitleField,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            answer: String::new(),
            title_field: TitleField::Grade,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// A run started; the chosen config should be saved.
    Started,
    Quit,
}

pub fn handle_key(
    key: KeyEvent,
    session: &mut GameSession,
    input: &mut InputState,
    now_ms: u64,
) -> InputResult {
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if ctrl_c || key.code == KeyCode::Esc {
        return InputResult::Quit;
    }

    match session.status() {
        GameStatus::Title => handle_title(key, session, input),
        GameStatus::Question => {
            handle_answer(key, session, input, now_ms);
            InputResult::Continue
        }
        GameStatus::Running | GameStatus::Paused => {
            handle_play(key, session, now_ms);
            InputResult::Continue
        }
        GameStatus::Victory | GameStatus::Defeat => InputResult::Continue,
    }
}

fn handle_title(key: KeyEvent, session: &mut GameSession, input: &mut InputState) -> InputResult {
    let mut config = *session.config();
    match key.code {
        KeyCode::Up | KeyCode::Down => {
            input.title_field = match input.title_field {
                TitleField::Grade => TitleField::Subject,
                TitleField::Subject => TitleField::Grade,
            };
        }
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            match input.title_field {
                TitleField::Grade => config.cycle_grade(forward),
                TitleField::Subject => config.cycle_subject(forward),
            }
            session.set_config(config);
        }
        KeyCode::Enter => {
            input.answer.clear();
            if session.start_run() {
                return InputResult::Started;
            }
        }
        _ => {}
    }
    InputResult::Continue
}

fn handle_answer(key: KeyEvent, session: &mut GameSession, input: &mut InputState, now_ms: u64) {
    match key.code {
        KeyCode::Char(c) if input.answer.chars().count() < MAX_ANSWER_LEN => {
            if !c.is_control() {
                input.answer.push(c);
            }
        }
        KeyCode::Backspace => {
            input.answer.pop();
        }
        KeyCode::Enter if !input.answer.trim().is_empty() && !session.is_answer_locked() => {
            session.submit_answer(&input.answer, now_ms);
            input.answer.clear();
        }
        _ => {}
    }
}

fn handle_play(key: KeyEvent, session: &mut GameSession, now_ms: u64) {
    if let KeyCode::Char(c) = key.code {
        if c.eq_ignore_ascii_case(&'p') {
            session.toggle_pause();
            return;
        }
        if let Some(direction) = direction_for_key(c) {
            session.handle_step(direction, now_ms);
        }
    }
}

/// Q W E over A S D: the six hex neighbors around the actor.
pub fn direction_for_key(c: char) -> Option<HexDirection> {
    match c.to_ascii_lowercase() {
        'q' => Some(HexDirection::NorthWest),
        'w' => Some(HexDirection::North),
        'e' => Some(HexDirection::NorthEast),
        'a' => Some(HexDirection::SouthWest),
        's' => Some(HexDirection::South),
        'd' => Some(HexDirection::SouthEast),
        _ => None,
    }
}

/// Left clicks on the board become move commands.
pub fn handle_mouse(
    mouse: MouseEvent,
    session: &mut GameSession,
    board: Rect,
    now_ms: u64,
) -> Option<MoveRequest> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (x, y) = cell_to_pixel(board, mouse.column, mouse.row)?;
    Some(session.handle_click(x, y, now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use hexquest::core::config::GameConfig;
    use hexquest::quiz::GradeLevel;
    use hexquest::session::SessionSettings;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), SessionSettings::default(), Some(9))
    }

    #[test]
    fn test_default_input_starts_on_grade() {
        let input = InputState::default();
        assert!(input.answer.is_empty());
        assert_eq!(input.title_field, TitleField::Grade);
    }

    #[test]
    fn test_direction_keys() {
        assert_eq!(direction_for_key('Q'), Some(HexDirection::NorthWest));
        assert_eq!(direction_for_key('s'), Some(HexDirection::South));
        assert_eq!(direction_for_key('x'), None);
    }

    #[test]
    fn test_title_keys_change_config_then_start() {
        let mut session = session();
        let mut input = InputState::new();
        assert_eq!(
            handle_key(key(KeyCode::Right), &mut session, &mut input, 0),
            InputResult::Continue
        );
        assert_eq!(session.config().grade, GradeLevel::Second);
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut session, &mut input, 0),
            InputResult::Started
        );
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_escape_quits_from_any_screen() {
        let mut session = session();
        let mut input = InputState::new();
        assert_eq!(
            handle_key(key(KeyCode::Esc), &mut session, &mut input, 0),
            InputResult::Quit
        );
    }

    #[test]
    fn test_pause_key_toggles() {
        let mut session = session();
        let mut input = InputState::new();
        session.start_run();
        handle_key(key(KeyCode::Char('p')), &mut session, &mut input, 0);
        assert_eq!(session.status(), GameStatus::Paused);
        handle_key(key(KeyCode::Char('P')), &mut session, &mut input, 0);
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_clicks_outside_board_are_dropped() {
        let mut session = session();
        session.start_run();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse(click, &mut session, Rect::new(5, 5, 10, 10), 0), None);
    }
}
