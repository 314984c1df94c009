use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::LessonBank;

/// Errors raised while fetching a lesson bank.
///
/// Every variant is recoverable: the lesson view shows it with a retry prompt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No lesson document exists for the identifier.
    #[error("no lesson data found for '{lesson}'")]
    NotFound { lesson: String },

    /// The document exists but could not be read.
    #[error("failed to read lesson '{lesson}': {source}")]
    Io {
        lesson: String,
        #[source]
        source: io::Error,
    },

    /// The document does not have the lesson bank shape.
    #[error("lesson '{lesson}' is malformed: {reason}")]
    Malformed { lesson: String, reason: String },
}

impl LoadError {
    pub fn lesson(&self) -> &str {
        match self {
            LoadError::NotFound { lesson }
            | LoadError::Io { lesson, .. }
            | LoadError::Malformed { lesson, .. } => lesson,
        }
    }
}

/// Reads lesson banks from `<data_dir>/<lesson>.json`.
#[derive(Debug, Clone)]
pub struct LessonRepository {
    data_dir: PathBuf,
}

impl LessonRepository {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn bank_path(&self, lesson: &str) -> Option<PathBuf> {
        let valid = !lesson.is_empty()
            && lesson
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| self.data_dir.join(format!("{}.json", lesson)))
    }

    /// Fetch the full question bank for `lesson`.
    pub async fn fetch(&self, lesson: &str) -> Result<LessonBank, LoadError> {
        let Some(path) = self.bank_path(lesson) else {
            return Err(LoadError::NotFound {
                lesson: lesson.to_string(),
            });
        };

        info!(lesson, path = %path.display(), "loading lesson");

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => LoadError::NotFound {
                    lesson: lesson.to_string(),
                },
                _ => LoadError::Io {
                    lesson: lesson.to_string(),
                    source,
                },
            })?;

        let bank = parse_lesson_bank(lesson, &content)?;
        info!(lesson, questions = bank.len(), "lesson loaded");
        Ok(bank)
    }
}

/// Parse and validate a lesson document.
pub fn parse_lesson_bank(lesson: &str, content: &str) -> Result<LessonBank, LoadError> {
    let malformed = |reason: String| LoadError::Malformed {
        lesson: lesson.to_string(),
        reason,
    };

    let bank: LessonBank =
        serde_json::from_str(content).map_err(|err| malformed(err.to_string()))?;

    if bank.is_empty() {
        return Err(malformed("lesson has no questions".to_string()));
    }

    let mut seen = HashSet::with_capacity(bank.len());
    for question in &bank.questions {
        question.validate().map_err(malformed)?;
        if !seen.insert(question.id.as_str()) {
            return Err(malformed(format!("duplicate question id {}", question.id)));
        }
    }

    debug!(lesson, concepts = ?bank.info.concepts, "lesson bank validated");
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"{
        "lessonInfo": {
            "title": "Basic Arithmetic",
            "instructor": "Professor Tinkles",
            "emoji": "🐱",
            "difficulty": "beginner",
            "concepts": ["Subtraction"]
        },
        "questions": [
            {"id": "a1", "question": "8 - 3?", "answer": 5, "options": [3, 5, 8], "explanation": "8 - 3 = 5", "concept": "Subtraction"},
            {"id": "a2", "question": "6 + 4?", "answer": 10, "options": [8, 10], "explanation": "6 + 4 = 10", "concept": "Addition"}
        ]
    }"#;

    #[test]
    fn test_parse_valid_bank() {
        let bank = parse_lesson_bank("arithmetic", BANK).unwrap();
        assert_eq!(bank.info.title, "Basic Arithmetic");
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let json = r#"{"lessonInfo": {"title": "x"}, "questions": []}"#;
        let err = parse_lesson_bank("broken", json).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert_eq!(err.lesson(), "broken");
    }

    #[test]
    fn test_invalid_question_is_malformed() {
        let json = BANK.replace("[3, 5, 8]", "[3, 8]");
        let err = parse_lesson_bank("arithmetic", &json).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_float_option_matches_integer_answer() {
        let json = BANK.replace("[3, 5, 8]", "[3.0, 5.0, 8.0]");
        let bank = parse_lesson_bank("arithmetic", &json).unwrap();
        assert_eq!(bank.questions[0].answer_index(), Some(1));

        let json = BANK.replace("[3, 5, 8]", "[3, 5, 5.0]");
        let err = parse_lesson_bank("arithmetic", &json).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_duplicate_ids_are_malformed() {
        let json = BANK.replace("\"a2\"", "\"a1\"");
        assert!(parse_lesson_bank("arithmetic", &json).is_err());
    }

    #[tokio::test]
    async fn test_fetch_reads_bank_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("arithmetic.json"), BANK).unwrap();

        let repo = LessonRepository::new(dir.path());
        let bank = repo.fetch("arithmetic").await.unwrap();
        assert_eq!(bank.questions[0].id, "a1");

        // fetching is idempotent
        assert_eq!(repo.fetch("arithmetic").await.unwrap(), bank);
    }

    #[tokio::test]
    async fn test_fetch_missing_lesson() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LessonRepository::new(dir.path());

        let err = repo.fetch("geometry").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.lesson(), "geometry");

        let err = repo.fetch("../secrets").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }
}
