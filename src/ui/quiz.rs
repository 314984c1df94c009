use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::LessonView;
use crate::catalog::LessonMessages;
use crate::models::{AnswerValue, Question};
use crate::session::{Phase, QuizSession};

use super::{difficulty_badge, render_controls};

const OPTION_LABELS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(frame: &mut Frame, area: Rect, lesson: &LessonView, session: &QuizSession) {
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let messages = &lesson.entry().messages;

    render_header(frame, chunks[0], session);
    render_progress(frame, chunks[1], session);
    render_concept(frame, chunks[2], question, messages);
    render_question_text(frame, chunks[3], &question.question);
    render_options(frame, chunks[4], question, session.phase(), lesson.cursor());

    if let Phase::Answered { correct, .. } = session.phase() {
        render_feedback(frame, chunks[5], question, messages, *correct);
        let next = if session.is_last_question() {
            "enter complete lesson  ·  q quit"
        } else {
            "enter next question  ·  q quit"
        };
        render_controls(frame, chunks[6], next);
    } else {
        render_controls(
            frame,
            chunks[6],
            "j/k navigate  ·  enter or 1-9 answer  ·  esc home  ·  q quit",
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let info = session.info();
    let line = Line::from(vec![
        Span::styled(
            format!("{} {} with {}  ", info.emoji, info.title, info.instructor),
            Style::default().fg(Color::Cyan).bold(),
        ),
        difficulty_badge(info.difficulty),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let total = session.total_questions().max(1);
    let ratio = session.current_question_number() as f64 / total as f64;
    let widget = Gauge::default()
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "Question {} of {}",
            session.current_question_number(),
            session.total_questions()
        ))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black));
    frame.render_widget(widget, area);
}

fn render_concept(frame: &mut Frame, area: Rect, question: &Question, messages: &LessonMessages) {
    let Some(concept) = question.concept.as_deref() else {
        return;
    };
    let widget = Paragraph::new(format!("{} {}", messages.concept_icon(concept), concept))
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(
    option: &AnswerValue,
    answer: &AnswerValue,
    phase: &Phase,
    is_cursor: bool,
) -> (Style, &'static str) {
    match phase {
        Phase::Answered { selected, .. } => {
            if option == answer {
                (Style::default().fg(Color::Green).bold(), "+")
            } else if option == selected {
                (Style::default().fg(Color::Red).bold(), "-")
            } else {
                (Style::default().fg(Color::DarkGray), " ")
            }
        }
        Phase::Unanswered if is_cursor => (Style::default().fg(Color::Cyan).bold(), ">"),
        Phase::Unanswered => (Style::default().fg(Color::Gray), " "),
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    phase: &Phase,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (style, marker) = option_style(option, &question.answer, phase, index == cursor);
        let label = OPTION_LABELS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.to_string(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    messages: &LessonMessages,
    correct: bool,
) {
    let color = if correct { Color::Green } else { Color::Red };
    let content = vec![
        Line::from(Span::styled(
            messages.feedback(correct),
            Style::default().fg(color).bold(),
        )),
        Line::from(question.explanation.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
