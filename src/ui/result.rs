use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::catalog::LessonEntry;
use crate::session::QuizSession;

use super::render_controls;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, entry: &LessonEntry, session: &QuizSession) {
    let summary = session.summary();
    let grade_color = get_grade_color(summary.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let message = entry.messages.score_message(summary.score, summary.total);
    render_score_summary(frame, chunks[1], session, message, grade_color);
    render_question_list(frame, chunks[2], session);
    render_controls(
        frame,
        chunks[3],
        "r try again  ·  t tea time  ·  esc home  ·  q quit",
    );
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    session: &QuizSession,
    message: &str,
    grade_color: Color,
) {
    let summary = session.summary();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Lesson Complete!", session.info().title),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(message.to_string().fg(Color::White)),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                summary.score,
                summary.total,
                summary.percentage()
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_list(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let lines: Vec<Line> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            Line::from(vec![
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&question.question),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  = {}", question.answer),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
