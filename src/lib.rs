//! # math-quiz
//!
//! A terminal math-lesson quiz: themed lessons draw a random handful of
//! questions from a JSON bank, score each answer, and feed finished lessons
//! into program-wide stats that unlock achievements.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use math_quiz::{Config, MathQuiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = MathQuiz::new(Config::default());
//!     quiz.run().await
//! }
//! ```

pub mod achievements;
mod app;
pub mod catalog;
mod config;
mod data;
mod models;
pub mod progress;
pub mod selector;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::{App, LessonLoaded, LessonState, LessonView, TeaTime, View};
pub use config::{Config, ConfigError};
pub use data::{LessonRepository, LoadError, parse_lesson_bank};
pub use models::{AnswerValue, Difficulty, LessonBank, LessonInfo, Question};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct MathQuiz {
    app: App,
}

impl MathQuiz {
    pub fn new(config: Config) -> Self {
        Self {
            app: App::new(config),
        }
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits. Must be called inside a Tokio runtime; lesson
    /// banks are fetched on background tasks.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut terminal = terminal::TerminalGuard::enter()?;
        run_event_loop(&mut terminal, &mut self.app)?;
        info!("quiz closed");
        Ok(())
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    while !app.should_quit() {
        app.poll_loads();
        app.tick(Instant::now());

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(INPUT_POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                app.quit();
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Screen {
    Home,
    Loading,
    LoadFailed,
    Question,
    Complete,
    Interlude,
}

fn current_screen(app: &App) -> Screen {
    match app.view() {
        View::Home { .. } => Screen::Home,
        View::Lesson(lesson) => match lesson.state() {
            LessonState::Loading => Screen::Loading,
            LessonState::Failed(_) => Screen::LoadFailed,
            LessonState::Active(session) if session.is_completed() => Screen::Complete,
            LessonState::Active(_) => Screen::Question,
        },
        View::TeaTime(_) | View::Achievements => Screen::Interlude,
    }
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match current_screen(app) {
        Screen::Home => handle_home_input(app, key),
        Screen::Loading => handle_back_input(app, key),
        Screen::LoadFailed => handle_error_input(app, key),
        Screen::Question => handle_quiz_input(app, key),
        Screen::Complete => handle_complete_input(app, key),
        Screen::Interlude => {
            if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h')) {
                app.go_home();
            }
        }
    }

    false
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.navigate(catalog::TEA_TIME_KEY),
        KeyCode::Char('a') | KeyCode::Char('A') => app.navigate(catalog::ACHIEVEMENTS_KEY),
        _ => {}
    }
}

fn handle_back_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Char('h')) {
        app.go_home();
    }
}

fn handle_error_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.retry(),
        _ => handle_back_input(app, key),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.answer(digit as usize - 1);
            }
        }
        KeyCode::Char('n') => app.advance(),
        _ => handle_back_input(app, key),
    }
}

fn handle_complete_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.navigate(catalog::TEA_TIME_KEY),
        _ => handle_back_input(app, key),
    }
}
