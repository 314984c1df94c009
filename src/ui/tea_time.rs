use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::TeaTime;

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, tea: &TeaTime, now: Instant) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let remaining = tea.remaining(now).as_secs();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TEA TIME",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}:{:02}", remaining / 60, remaining % 60),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(tea.quote(now).fg(Color::Gray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[3], "enter continue  ·  q quit");
}
