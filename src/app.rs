use std::time::{Duration, Instant};

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::achievements::AchievementNotice;
use crate::catalog::{self, LessonEntry, MenuItem, Route};
use crate::config::Config;
use crate::data::{LessonRepository, LoadError};
use crate::models::LessonBank;
use crate::progress::Progress;
use crate::session::{Advance, QuizSession};

const TEA_TIME_QUOTE_PERIOD: Duration = Duration::from_secs(5);

const TEA_TIME_QUOTES: [&str; 8] = [
    "Tea time is the perfect moment to reflect on mathematical beauty.",
    "A proper cup of tea can solve any mathematical conundrum!",
    "In Britain, we believe that tea makes everything better - including math!",
    "Professor Tinkles always says: 'Tea first, equations second!'",
    "Even the most complex problems seem simpler after a good cuppa!",
    "The British Empire was built on tea and mathematics!",
    "A mathematician's best friend is a warm cup of Earl Grey.",
    "Tea time: when even cats pause to appreciate the finer things in life.",
];

/// A finished lesson fetch, tagged with the ticket of the view that asked for it.
#[derive(Debug)]
pub struct LessonLoaded {
    pub ticket: Uuid,
    pub lesson: &'static str,
    pub result: Result<LessonBank, LoadError>,
}

pub enum LessonState {
    Loading,
    Failed(LoadError),
    Active(QuizSession),
}

pub struct LessonView {
    entry: &'static LessonEntry,
    ticket: Uuid,
    state: LessonState,
    cursor: usize,
}

impl LessonView {
    pub fn entry(&self) -> &'static LessonEntry {
        self.entry
    }

    pub fn state(&self) -> &LessonState {
        &self.state
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.state {
            LessonState::Active(session) => Some(session),
            _ => None,
        }
    }

    /// Option currently highlighted by the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Countdown owned by the tea time view; dropped with it.
pub struct TeaTime {
    started_at: Instant,
    duration: Duration,
}

impl TeaTime {
    fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    pub fn is_over(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    pub fn quote(&self, now: Instant) -> &'static str {
        let elapsed = now.saturating_duration_since(self.started_at);
        let index = (elapsed.as_secs() / TEA_TIME_QUOTE_PERIOD.as_secs()) as usize;
        TEA_TIME_QUOTES[index % TEA_TIME_QUOTES.len()]
    }
}

pub enum View {
    Home { cursor: usize },
    Lesson(LessonView),
    TeaTime(TeaTime),
    Achievements,
}

pub struct App {
    view: View,
    config: Config,
    repository: LessonRepository,
    progress: Progress,
    notice: Option<AchievementNotice>,
    menu: Vec<MenuItem>,
    rng: StdRng,
    loads_tx: mpsc::UnboundedSender<LessonLoaded>,
    loads_rx: mpsc::UnboundedReceiver<LessonLoaded>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Build an app with a caller-supplied random source for question draws.
    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        let (loads_tx, loads_rx) = mpsc::unbounded_channel();

        Self {
            view: View::Home { cursor: 0 },
            repository: LessonRepository::new(config.data_dir.clone()),
            config,
            progress: Progress::new(),
            notice: None,
            menu: catalog::menu(),
            rng,
            loads_tx,
            loads_rx,
            should_quit: false,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn notice(&self) -> Option<&AchievementNotice> {
        self.notice.as_ref()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn lesson(&self) -> Option<&LessonView> {
        match &self.view {
            View::Lesson(lesson) => Some(lesson),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.lesson().and_then(LessonView::session)
    }

    /// Switch to the view named by `key`; unknown keys go home.
    pub fn navigate(&mut self, key: &str) {
        self.open(Route::resolve(key));
    }

    pub fn open(&mut self, route: Route) {
        debug!(route = route.key(), "opening view");
        match route {
            Route::Home => self.view = View::Home { cursor: 0 },
            Route::Lesson(entry) => self.start_load(entry),
            Route::TeaTime => {
                self.view = View::TeaTime(TeaTime::new(
                    Instant::now(),
                    self.config.tea_time_duration(),
                ))
            }
            Route::Achievements => self.view = View::Achievements,
        }
    }

    pub fn go_home(&mut self) {
        self.open(Route::Home);
    }

    /// Enter `entry` in the loading state and fetch its bank in the background.
    ///
    /// Any earlier fetch still in flight is orphaned: its ticket no longer
    /// matches the view, so [`App::apply_load`] drops it.
    fn start_load(&mut self, entry: &'static LessonEntry) {
        let ticket = Uuid::new_v4();
        self.view = View::Lesson(LessonView {
            entry,
            ticket,
            state: LessonState::Loading,
            cursor: 0,
        });

        let repository = self.repository.clone();
        let tx = self.loads_tx.clone();
        tokio::spawn(async move {
            let result = repository.fetch(entry.id).await;
            let _ = tx.send(LessonLoaded {
                ticket,
                lesson: entry.id,
                result,
            });
        });
    }

    /// Re-issue the fetch for a lesson whose load failed.
    pub fn retry(&mut self) {
        if let View::Lesson(LessonView {
            entry,
            state: LessonState::Failed(_),
            ..
        }) = &self.view
        {
            let entry = *entry;
            info!(lesson = entry.id, "retrying lesson load");
            self.start_load(entry);
        }
    }

    /// Apply every fetch result that has arrived so far.
    pub fn poll_loads(&mut self) {
        while let Ok(loaded) = self.loads_rx.try_recv() {
            self.apply_load(loaded);
        }
    }

    /// Wait for the next fetch result.
    pub async fn next_load(&mut self) -> Option<LessonLoaded> {
        self.loads_rx.recv().await
    }

    /// Install a fetch result if it belongs to the lesson currently loading.
    /// Returns whether it was applied.
    pub fn apply_load(&mut self, loaded: LessonLoaded) -> bool {
        let default_count = self.config.question_count;
        let lesson = match &mut self.view {
            View::Lesson(lesson)
                if lesson.ticket == loaded.ticket
                    && matches!(lesson.state, LessonState::Loading) =>
            {
                lesson
            }
            _ => {
                debug!(lesson = loaded.lesson, "discarding stale lesson load");
                return false;
            }
        };

        lesson.state = match loaded.result {
            Ok(bank) => {
                let count = lesson.entry.question_count(default_count);
                LessonState::Active(QuizSession::start(bank, count, &mut self.rng))
            }
            Err(err) => {
                warn!(lesson = loaded.lesson, %err, "lesson load failed");
                LessonState::Failed(err)
            }
        };
        lesson.cursor = 0;
        true
    }

    pub fn select_next(&mut self) {
        let menu_len = self.menu.len();
        match &mut self.view {
            View::Home { cursor } => *cursor = (*cursor + 1) % menu_len,
            View::Lesson(lesson) => {
                if let Some(len) = answerable_options(lesson) {
                    lesson.cursor = (lesson.cursor + 1) % len;
                }
            }
            _ => {}
        }
    }

    pub fn select_previous(&mut self) {
        let menu_len = self.menu.len();
        match &mut self.view {
            View::Home { cursor } => *cursor = (*cursor + menu_len - 1) % menu_len,
            View::Lesson(lesson) => {
                if let Some(len) = answerable_options(lesson) {
                    lesson.cursor = (lesson.cursor + len - 1) % len;
                }
            }
            _ => {}
        }
    }

    /// Enter on the current view: open the highlighted menu entry, answer
    /// with the highlighted option, or move past an answered question.
    pub fn confirm(&mut self) {
        match &self.view {
            View::Home { cursor } => {
                if let Some(item) = self.menu.get(*cursor) {
                    let key = item.key;
                    self.navigate(key);
                }
            }
            View::Lesson(lesson) => match lesson.session() {
                Some(session) if session.is_answered() => self.advance(),
                Some(_) => {
                    let index = lesson.cursor;
                    self.answer(index);
                }
                None => {}
            },
            View::TeaTime(_) | View::Achievements => self.go_home(),
        }
    }

    /// Answer the current question with the option at `index`.
    pub fn answer(&mut self, index: usize) {
        let View::Lesson(LessonView {
            state: LessonState::Active(session),
            cursor,
            ..
        }) = &mut self.view
        else {
            return;
        };

        let Some(candidate) = session
            .current_question()
            .and_then(|q| q.options.get(index))
            .cloned()
        else {
            return;
        };

        if session.select_answer(&candidate).is_some() {
            *cursor = index;
        }
    }

    /// Move on from an answered question. Completing the session is the one
    /// place program progress is updated.
    pub fn advance(&mut self) {
        let View::Lesson(LessonView {
            state: LessonState::Active(session),
            cursor,
            ..
        }) = &mut self.view
        else {
            return;
        };

        match session.advance() {
            Advance::Ignored => {}
            Advance::NextQuestion(_) => *cursor = 0,
            Advance::Completed(summary) => {
                let unlocked = self.progress.record_completion(summary, Utc::now());
                if !unlocked.is_empty() {
                    self.notice = Some(AchievementNotice::new(
                        unlocked,
                        Instant::now(),
                        self.config.notification_duration(),
                    ));
                }
            }
        }
    }

    /// Fresh draw for a completed lesson.
    pub fn restart(&mut self) {
        if let View::Lesson(LessonView {
            state: LessonState::Active(session),
            cursor,
            ..
        }) = &mut self.view
        {
            if session.restart(&mut self.rng) {
                *cursor = 0;
            }
        }
    }

    /// Advance timers: expire the achievement banner and end a finished break.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }

        let break_over = matches!(&self.view, View::TeaTime(tea) if tea.is_over(now));
        if break_over {
            info!("tea time over");
            self.go_home();
        }
    }
}

/// Number of options the cursor can move over, if a question is awaiting an answer.
fn answerable_options(lesson: &LessonView) -> Option<usize> {
    let session = lesson.session()?;
    if session.is_answered() || session.is_completed() {
        return None;
    }
    session
        .current_question()
        .map(|q| q.options.len())
        .filter(|len| *len > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"{
        "lessonInfo": {"title": "Geometry", "instructor": "Sir Whiskersworth", "emoji": "📐", "difficulty": "intermediate", "concepts": []},
        "questions": [
            {"id": "g1", "question": "Perimeter of 3-4-5 triangle?", "answer": 12, "options": [7, 10, 12, 15], "explanation": "3 + 4 + 5 = 12", "concept": "triangle"},
            {"id": "g2", "question": "Diameter for radius 4?", "answer": 8, "options": [4, 6, 8, 12], "explanation": "2 × 4 = 8", "concept": "circle"},
            {"id": "g3", "question": "Area of 6x6 square?", "answer": 36, "options": [12, 24, 36, 48], "explanation": "6 × 6 = 36", "concept": "square"}
        ]
    }"#;

    fn app_with_data() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("geometry.json"), BANK).unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        (App::with_rng(config, StdRng::seed_from_u64(9)), dir)
    }

    async fn load(app: &mut App) {
        let loaded = app.next_load().await.unwrap();
        assert!(app.apply_load(loaded));
    }

    fn correct_index(app: &App) -> usize {
        app.session()
            .unwrap()
            .current_question()
            .unwrap()
            .answer_index()
            .unwrap()
    }

    #[tokio::test]
    async fn test_lesson_loads_into_session() {
        let (mut app, _dir) = app_with_data();
        app.navigate("geometry");
        assert!(matches!(app.lesson().unwrap().state(), LessonState::Loading));

        load(&mut app).await;
        let session = app.session().unwrap();
        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.info().instructor, "Sir Whiskersworth");
    }

    #[tokio::test]
    async fn test_configured_question_count_sets_draw_size() {
        let (app, dir) = app_with_data();
        let config = Config {
            question_count: 2,
            ..app.config().clone()
        };
        let mut app = App::with_rng(config, StdRng::seed_from_u64(9));

        app.navigate("geometry");
        load(&mut app).await;
        assert_eq!(app.session().unwrap().total_questions(), 2);
        drop(dir);
    }

    #[tokio::test]
    async fn test_missing_bank_shows_error_and_retries() {
        let (mut app, _dir) = app_with_data();
        app.navigate("calculus");

        load(&mut app).await;
        assert!(matches!(
            app.lesson().unwrap().state(),
            LessonState::Failed(LoadError::NotFound { .. })
        ));
        assert_eq!(app.progress().stats().lessons_completed, 0);

        app.retry();
        assert!(matches!(app.lesson().unwrap().state(), LessonState::Loading));
        load(&mut app).await;
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let (mut app, _dir) = app_with_data();
        app.navigate("geometry");
        app.go_home();

        let loaded = app.next_load().await.unwrap();
        assert!(!app.apply_load(loaded));
        assert!(matches!(app.view(), View::Home { .. }));
    }

    #[tokio::test]
    async fn test_completion_updates_progress_once() {
        let (mut app, _dir) = app_with_data();
        app.navigate("geometry");
        load(&mut app).await;

        for _ in 0..3 {
            let index = correct_index(&app);
            app.answer(index);
            app.advance();
        }
        app.advance();
        app.confirm();

        let session = app.session().unwrap();
        assert!(session.is_completed());
        assert_eq!(session.score(), 3);

        let stats = app.progress().stats();
        assert_eq!(stats.lessons_completed, 1);
        assert_eq!(stats.perfect_scores, 1);

        let notice = app.notice().unwrap();
        let ids: Vec<_> = notice.achievements.iter().map(|a| a.id).collect();
        assert_eq!(ids, ["first-lesson", "perfect-score"]);
    }

    #[tokio::test]
    async fn test_confirm_answers_then_advances() {
        let (mut app, _dir) = app_with_data();
        app.navigate("geometry");
        load(&mut app).await;

        app.select_next();
        assert_eq!(app.lesson().unwrap().cursor(), 1);
        app.confirm();
        assert!(app.session().unwrap().is_answered());

        // cursor is frozen once answered
        app.select_next();
        assert_eq!(app.lesson().unwrap().cursor(), 1);

        app.confirm();
        assert_eq!(app.session().unwrap().current_index(), 1);
        assert_eq!(app.lesson().unwrap().cursor(), 0);
    }

    #[tokio::test]
    async fn test_notice_expires() {
        let (mut app, _dir) = app_with_data();
        app.navigate("geometry");
        load(&mut app).await;
        for _ in 0..3 {
            app.answer(0);
            app.advance();
        }
        assert!(app.notice().is_some());

        app.tick(Instant::now() + Duration::from_secs(4));
        assert!(app.notice().is_some());
        app.tick(Instant::now() + Duration::from_secs(6));
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_tea_time_returns_home() {
        let (mut app, _dir) = app_with_data();
        app.navigate("tea-time");
        assert!(matches!(app.view(), View::TeaTime(_)));

        app.tick(Instant::now() + Duration::from_secs(10));
        assert!(matches!(app.view(), View::TeaTime(_)));

        app.tick(Instant::now() + Duration::from_secs(31));
        assert!(matches!(app.view(), View::Home { .. }));
    }

    #[test]
    fn test_tea_time_quotes_rotate() {
        let start = Instant::now();
        let tea = TeaTime::new(start, Duration::from_secs(30));
        assert_eq!(tea.quote(start), TEA_TIME_QUOTES[0]);
        assert_eq!(tea.quote(start + Duration::from_secs(6)), TEA_TIME_QUOTES[1]);
        assert_eq!(tea.remaining(start + Duration::from_secs(40)), Duration::ZERO);
    }

    #[test]
    fn test_unknown_route_goes_home() {
        let (mut app, _dir) = app_with_data();
        app.navigate("achievements");
        app.navigate("alchemy");
        assert!(matches!(app.view(), View::Home { .. }));
    }

    #[test]
    fn test_home_cursor_wraps() {
        let (mut app, _dir) = app_with_data();
        app.select_previous();
        assert!(matches!(app.view(), View::Home { cursor } if *cursor == app.menu().len() - 1));
        app.select_next();
        assert!(matches!(app.view(), View::Home { cursor: 0 }));
    }
}
