use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App, cursor: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_banner(frame, chunks[0]);
    render_stats(frame, chunks[1], app);
    render_menu(frame, chunks[2], app, cursor);
    render_controls(
        frame,
        chunks[3],
        "j/k navigate  ·  enter open  ·  t tea time  ·  a achievements  ·  q quit",
    );
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "PURR-FECT MATHEMATICS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Math lessons with a proper cup of tea".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.progress().stats();
    let line = Line::from(vec![
        Span::styled("Lessons ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            stats.lessons_completed.to_string(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled("  ·  Perfect ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            stats.perfect_scores.to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled("  ·  Score ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            stats.total_score.to_string(),
            Style::default().fg(Color::Cyan).bold(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App, cursor: usize) {
    let lines: Vec<Line> = app
        .menu()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_selected = index == cursor;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{} ", item.icon), style),
                Span::styled(format!("{:<26}", item.title), style),
                Span::styled(item.description, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}
