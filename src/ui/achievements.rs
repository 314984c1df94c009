use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::achievements::ACHIEVEMENTS;
use crate::progress::Progress;

use super::{rarity_color, render_controls};

pub fn render(frame: &mut Frame, area: Rect, progress: &Progress) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let state = progress.achievements();
    let header = Paragraph::new(Line::from(vec![
        Span::styled("ACHIEVEMENTS  ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("{} / {}", state.unlocked_count(), ACHIEVEMENTS.len()),
            Style::default().fg(Color::Yellow).bold(),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(header, chunks[0]);

    // unlocked first, then locked, keeping definition order within each group
    let (unlocked, locked): (Vec<_>, Vec<_>) =
        state.entries().partition(|(_, unlocked_at)| unlocked_at.is_some());

    let mut lines: Vec<Line> = Vec::new();
    for (achievement, unlocked_at) in unlocked {
        let color = rarity_color(achievement.rarity);
        lines.push(Line::from(vec![
            Span::styled(" * ", Style::default().fg(color)),
            Span::styled(achievement.title, Style::default().fg(Color::White).bold()),
            Span::styled(
                format!("  [{}]", achievement.rarity.label()),
                Style::default().fg(color),
            ),
        ]));
        let mut detail = achievement.description.to_string();
        if let Some(at) = unlocked_at {
            detail.push_str(&format!("  ·  unlocked {}", at.format("%Y-%m-%d")));
        }
        lines.push(Line::from(Span::styled(
            format!("   {}", detail),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    for _ in locked {
        lines.push(Line::from(vec![
            Span::styled(" ? ", Style::default().fg(Color::DarkGray)),
            Span::styled("???", Style::default().fg(Color::DarkGray).bold()),
            Span::styled("  [Locked]", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            "   Complete more lessons to unlock this achievement!",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[2], "esc home  ·  q quit");
}
