//! Question modal drawn over the board.

use hexquest::quiz::AnswerKind;
use hexquest::session::{FeedbackTone, GameSession};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::game_common::centered_rect;

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 10;

pub fn render_question_modal(frame: &mut Frame, area: Rect, session: &GameSession, answer: &str) {
    let Some(question) = session.question() else {
        return;
    };

    let modal = centered_rect(area, MODAL_WIDTH, MODAL_HEIGHT);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .title(format!(" {} - {} ", question.subject.name(), question.difficulty.name()));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let hint = match question.answer_kind() {
        AnswerKind::Numeric => "Type a number, then [Enter]",
        AnswerKind::Text => "Type your answer, then [Enter]",
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(answer.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    match session.feedback() {
        Some(feedback) => {
            let color = match feedback.tone {
                FeedbackTone::Positive => Color::Green,
                FeedbackTone::Negative => Color::LightRed,
            };
            lines.push(Line::from(Span::styled(
                feedback.text.clone(),
                Style::default().fg(color),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}
