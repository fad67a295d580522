//! Side panel: score, lives, subject and the tile legend.

use hexquest::core::game_state::GameStatus;
use hexquest::session::GameSession;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::game_common::render_info_panel_frame;

/// Right-hand panel: score, lives, grade, subject and a tile legend.
pub fn draw_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);
    let config = session.config();

    let hearts: String = "♥".repeat(session.lives() as usize);
    let mut lines = vec![
        Line::from(Span::styled(
            "HexQuest",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        stat_line("Score: ", session.score().to_string(), Color::Yellow),
        stat_line("Lives: ", hearts, Color::Red),
        Line::from(""),
        stat_line("Grade: ", config.grade.to_string(), Color::White),
        stat_line("Subject: ", config.subject.name().to_string(), Color::White),
    ];

    if let Some(question) = session.question() {
        lines.push(stat_line(
            "Level: ",
            question.difficulty.name().to_string(),
            Color::Magenta,
        ));
    }

    lines.push(Line::from(""));
    lines.push(legend_line("⬡", Color::Green, "ground"));
    lines.push(legend_line("⬡", Color::Red, "lava"));
    lines.push(legend_line("?", Color::Yellow, "challenge"));
    lines.push(legend_line("●", Color::LightYellow, "coin +10"));
    lines.push(legend_line("◎", Color::Magenta, "princess"));

    if session.status() == GameStatus::Paused {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn stat_line(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn legend_line(symbol: &'static str, color: Color, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(symbol, Style::default().fg(color)),
        Span::styled(format!(" {}", text), Style::default().fg(Color::DarkGray)),
    ])
}
