//! Title screen with grade and subject pickers.

use hexquest::core::config::GameConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::game_common::centered_rect;
use crate::input::TitleField;

pub fn render_title(frame: &mut Frame, area: Rect, config: &GameConfig, selected: TitleField) {
    let modal = centered_rect(area, 46, 14);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" HexQuest ");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Rescue the princess!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Cross the lava, answer the challenges.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        picker_line("Grade", &config.grade.to_string(), selected == TitleField::Grade),
        picker_line("Subject", config.subject.name(), selected == TitleField::Subject),
        Line::from(""),
        Line::from(Span::styled(
            "[↑↓] Choose  [←→] Change",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "[Enter] Start  [Esc] Quit",
            Style::default().fg(Color::White),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn picker_line(label: &str, value: &str, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        (
            ("◀ ", " ▶"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (("  ", "  "), Style::default().fg(Color::White))
    };
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}{}{}", marker.0, value, marker.1), style),
    ])
}
