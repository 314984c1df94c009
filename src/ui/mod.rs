mod achievements;
mod home;
mod lesson;
mod quiz;
mod result;
mod tea_time;

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::achievements::{AchievementNotice, Rarity};
use crate::app::{App, View};
use crate::models::Difficulty;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.view() {
        View::Home { cursor } => home::render(frame, area, app, *cursor),
        View::Lesson(lesson) => lesson::render(frame, area, lesson),
        View::TeaTime(tea) => tea_time::render(frame, area, tea, Instant::now()),
        View::Achievements => achievements::render(frame, area, app.progress()),
    }

    if let Some(notice) = app.notice() {
        render_notice(frame, area, notice);
    }
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::LightRed,
        Difficulty::Expert => Color::Red,
    }
}

fn difficulty_badge(difficulty: Difficulty) -> Span<'static> {
    Span::styled(
        format!("{} {}", difficulty.label(), "★".repeat(difficulty.stars())),
        Style::default().fg(difficulty_color(difficulty)).bold(),
    )
}

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &AchievementNotice) {
    let height = notice.achievements.len() as u16 * 2 + 4;
    let width = area.width.min(56);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height: height.min(area.height),
    };

    let mut lines = vec![Line::from(Span::styled(
        "New Achievement Unlocked!",
        Style::default().fg(Color::Yellow).bold(),
    ))];
    for achievement in &notice.achievements {
        lines.push(Line::from(Span::styled(
            achievement.title,
            Style::default().fg(rarity_color(achievement.rarity)).bold(),
        )));
        lines.push(Line::from(achievement.description.fg(Color::Gray)));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
