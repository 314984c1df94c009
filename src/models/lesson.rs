use serde::Deserialize;

use super::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
            Difficulty::Expert => "EXPERT",
        }
    }

    pub fn stars(self) -> usize {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
            Difficulty::Expert => 4,
        }
    }
}

/// Header of a lesson document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LessonInfo {
    pub title: String,
    pub instructor: String,
    pub emoji: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub concepts: Vec<String>,
}

/// Everything one lesson file holds: metadata plus the full question pool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LessonBank {
    #[serde(rename = "lessonInfo")]
    pub info: LessonInfo,
    pub questions: Vec<Question>,
}

impl LessonBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
