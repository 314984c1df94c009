use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{LessonState, LessonView};
use crate::data::LoadError;

use super::{quiz, render_controls, result};

pub fn render(frame: &mut Frame, area: Rect, lesson: &LessonView) {
    match lesson.state() {
        LessonState::Loading => render_loading(frame, area, lesson),
        LessonState::Failed(err) => render_error(frame, area, err),
        LessonState::Active(session) if session.is_completed() => {
            result::render(frame, area, lesson.entry(), session)
        }
        LessonState::Active(session) => quiz::render(frame, area, lesson, session),
    }
}

fn centered(area: Rect, height: u16) -> Rect {
    Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area)[1]
}

fn render_loading(frame: &mut Frame, area: Rect, lesson: &LessonView) {
    let entry = lesson.entry();
    let content = vec![
        Line::from(Span::styled(
            format!("{} {}", entry.icon, entry.title),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Loading lesson questions...".fg(Color::Yellow)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, centered(area, 3));
}

fn render_error(frame: &mut Frame, area: Rect, err: &LoadError) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Oops! The {} lesson could not be loaded", err.lesson()),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(err.to_string().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, centered(chunks[0], 7));
    render_controls(frame, chunks[1], "r try again  ·  esc home  ·  q quit");
}
