use std::path::PathBuf;

use crossterm::event::KeyCode;
use math_quiz::catalog::{self, LESSONS};
use math_quiz::{App, Config, LessonState, View, handle_input, parse_lesson_bank};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bundled_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn app(seed: u64) -> App {
    let config = Config {
        data_dir: bundled_data(),
        ..Config::default()
    };
    App::with_rng(config, StdRng::seed_from_u64(seed))
}

async fn open_lesson(app: &mut App, id: &str) {
    app.navigate(id);
    let loaded = app.next_load().await.unwrap();
    assert!(app.apply_load(loaded), "load for {id} was not applied");
}

fn correct_index(app: &App) -> usize {
    app.session()
        .unwrap()
        .current_question()
        .unwrap()
        .answer_index()
        .unwrap()
}

fn wrong_index(app: &App) -> usize {
    let correct = correct_index(app);
    if correct == 0 { 1 } else { 0 }
}

/// Answer every question, getting the first `right` of them correct.
fn play(app: &mut App, right: usize) {
    let total = app.session().unwrap().total_questions();
    for n in 0..total {
        let index = if n < right {
            correct_index(app)
        } else {
            wrong_index(app)
        };
        app.answer(index);
        app.advance();
    }
    assert!(app.session().unwrap().is_completed());
}

#[test]
fn test_bundled_lessons_parse() {
    for entry in LESSONS {
        let path = bundled_data().join(format!("{}.json", entry.id));
        let content = std::fs::read_to_string(&path).unwrap();
        let bank = parse_lesson_bank(entry.id, &content).unwrap();
        assert!(
            bank.len() >= entry.question_count(catalog::DEFAULT_QUESTION_COUNT),
            "{} has too few questions",
            entry.id
        );
    }
}

#[tokio::test]
async fn test_perfect_lesson_unlocks_first_achievements() {
    let mut app = app(1);
    open_lesson(&mut app, "arithmetic").await;
    assert_eq!(app.session().unwrap().total_questions(), 5);

    play(&mut app, 5);

    let stats = app.progress().stats();
    assert_eq!(stats.lessons_completed, 1);
    assert_eq!(stats.perfect_scores, 1);
    assert_eq!(stats.total_score, 5);

    let achievements = app.progress().achievements();
    assert!(achievements.is_unlocked("first-lesson"));
    assert!(achievements.is_unlocked("perfect-score"));
    assert!(!achievements.is_unlocked("math-master"));

    let notice = app.notice().unwrap();
    let ids: Vec<_> = notice.achievements.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["first-lesson", "perfect-score"]);
}

#[tokio::test]
async fn test_partial_score_is_not_perfect() {
    let mut app = app(2);
    open_lesson(&mut app, "geometry").await;

    play(&mut app, 3);

    let summary = app.session().unwrap().summary();
    assert_eq!((summary.score, summary.total), (3, 5));
    assert_eq!(app.progress().stats().perfect_scores, 0);
    assert!(!app.progress().achievements().is_unlocked("perfect-score"));

    // Advancing a finished lesson again must not count twice.
    app.advance();
    app.confirm();
    assert_eq!(app.progress().stats().lessons_completed, 1);
}

#[tokio::test]
async fn test_fifth_completion_unlocks_math_master() {
    let mut app = app(3);
    let lessons = ["arithmetic", "geometry", "calculus", "set-theory"];
    for id in lessons {
        open_lesson(&mut app, id).await;
        play(&mut app, 1);
    }
    assert!(!app.progress().achievements().is_unlocked("math-master"));

    // A retry of a finished lesson counts as another completion.
    app.restart();
    assert_eq!(app.session().unwrap().current_question_number(), 1);
    play(&mut app, 0);

    assert_eq!(app.progress().stats().lessons_completed, 5);
    assert!(app.progress().achievements().is_unlocked("math-master"));
    let notice = app.notice().unwrap();
    assert_eq!(notice.achievements.len(), 1);
    assert_eq!(notice.achievements[0].id, "math-master");
}

#[tokio::test]
async fn test_switching_lessons_discards_stale_load() {
    let mut app = app(4);
    app.navigate("calculus");
    let first = app.next_load().await.unwrap();

    app.navigate("trigonometry");
    assert!(!app.apply_load(first));
    assert!(matches!(app.lesson().unwrap().state(), LessonState::Loading));

    let second = app.next_load().await.unwrap();
    assert!(app.apply_load(second));
    assert_eq!(app.lesson().unwrap().entry().id, "trigonometry");
    assert_eq!(app.session().unwrap().info().title, "Trigonometry");
}

#[tokio::test]
async fn test_missing_lesson_file_fails_then_retries() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let mut app = App::with_rng(config, StdRng::seed_from_u64(5));

    app.navigate("probability");
    let loaded = app.next_load().await.unwrap();
    assert!(app.apply_load(loaded));
    assert!(matches!(app.lesson().unwrap().state(), LessonState::Failed(_)));

    let bank = bundled_data().join("probability.json");
    std::fs::copy(bank, dir.path().join("probability.json")).unwrap();

    assert!(!handle_input(&mut app, KeyCode::Char('r')));
    let loaded = app.next_load().await.unwrap();
    assert!(app.apply_load(loaded));
    assert!(app.session().is_some());
}

#[tokio::test]
async fn test_keyboard_drives_a_lesson() {
    let mut app = app(6);

    // Home menu lists lessons first, so Enter opens the first one.
    assert!(matches!(app.view(), View::Home { .. }));
    handle_input(&mut app, KeyCode::Enter);
    let loaded = app.next_load().await.unwrap();
    assert!(app.apply_load(loaded));
    assert_eq!(app.lesson().unwrap().entry().id, LESSONS[0].id);

    let total = app.session().unwrap().total_questions();
    for _ in 0..total {
        let index = correct_index(&app) as u32;
        let digit = char::from_digit(index + 1, 10).unwrap();
        handle_input(&mut app, KeyCode::Char(digit));
        assert!(app.session().unwrap().is_answered());
        handle_input(&mut app, KeyCode::Enter);
    }
    assert!(app.session().unwrap().is_completed());
    assert_eq!(app.progress().stats().perfect_scores, 1);

    handle_input(&mut app, KeyCode::Char('t'));
    assert!(matches!(app.view(), View::TeaTime(_)));
    handle_input(&mut app, KeyCode::Esc);
    assert!(matches!(app.view(), View::Home { .. }));

    assert!(handle_input(&mut app, KeyCode::Char('q')));
}
