pub mod board_scene;
pub mod game_common;
mod info_panel;
mod question_modal;
pub mod sprites;
mod title_scene;

use hexquest::core::game_state::GameStatus;
use hexquest::session::{DrawState, GameSession};
use ratatui::{style::Color, Frame};

use crate::input::InputState;
use board_scene::render_board;
use game_common::{
    game_layout, render_game_frame, render_run_over_banner, render_status_bar, RunResult,
};
use info_panel::draw_info_panel;
use question_modal::render_question_modal;
use sprites::Sprites;
use title_scene::render_title;

/// Draw one full frame: board, status bar, info panel and any overlay.
pub fn draw_ui(
    frame: &mut Frame,
    session: &GameSession,
    snapshot: &DrawState,
    sprites: &Sprites,
    input: &InputState,
) {
    let area = frame.size();
    let layout = game_layout(area);
    let status = session.status();

    let border_color = match status {
        GameStatus::Victory => Color::Green,
        GameStatus::Defeat => Color::Red,
        GameStatus::Paused => Color::Yellow,
        _ => Color::Cyan,
    };
    render_game_frame(frame, area, " HexQuest ", border_color);

    render_board(frame, layout.content, snapshot, sprites);
    draw_info_panel(frame, layout.info_panel, session);

    let (status_text, status_color, controls) = status_bar_content(session);
    render_status_bar(
        frame,
        layout.status_bar,
        &status_text,
        status_color,
        controls,
    );

    match status {
        GameStatus::Title => render_title(frame, layout.content, session.config(), input.title_field),
        GameStatus::Question => render_question_modal(frame, layout.content, session, &input.answer),
        GameStatus::Victory | GameStatus::Defeat => {
            if let Some(end) = session.end_message() {
                let result = if status == GameStatus::Victory {
                    RunResult::Victory
                } else {
                    RunResult::Defeat
                };
                let score_line = format!("Final score: {}", session.score());
                render_run_over_banner(
                    frame,
                    layout.content,
                    result,
                    end.title,
                    &end.body,
                    &score_line,
                );
            }
        }
        GameStatus::Running | GameStatus::Paused => {}
    }
}

fn status_bar_content(session: &GameSession) -> (String, Color, &'static [(&'static str, &'static str)]) {
    const MOVE_CONTROLS: &[(&str, &str)] = &[
        ("[Click/QWEASD]", "Move"),
        ("[P]", "Pause"),
        ("[Esc]", "Quit"),
    ];

    match session.status() {
        GameStatus::Title => (
            "Choose a grade and subject".to_string(),
            Color::White,
            &[("[Enter]", "Start"), ("[Esc]", "Quit")],
        ),
        GameStatus::Running => match session.notice() {
            Some(notice) => (notice.to_string(), Color::LightRed, MOVE_CONTROLS),
            None => (
                "Reach the princess at the top!".to_string(),
                Color::Cyan,
                MOVE_CONTROLS,
            ),
        },
        GameStatus::Paused => (
            "Paused".to_string(),
            Color::Yellow,
            &[("[P]", "Resume"), ("[Esc]", "Quit")],
        ),
        GameStatus::Question => (
            session
                .notice()
                .unwrap_or("Answer the challenge to pass")
                .to_string(),
            Color::Yellow,
            &[("[Enter]", "Submit"), ("[Esc]", "Quit")],
        ),
        GameStatus::Victory | GameStatus::Defeat => (
            session
                .end_message()
                .map(|end| end.title.to_string())
                .unwrap_or_default(),
            Color::White,
            &[("[Esc]", "Quit")],
        ),
    }
}
