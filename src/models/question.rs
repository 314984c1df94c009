use std::fmt;

use serde::Deserialize;

/// A value a question can be answered with.
///
/// Lesson files use either plain numbers or strings; an answer and its
/// options must share the same kind to be comparable. Numbers compare by
/// value, so `2` and `2.0` are the same answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(serde_json::Number),
    Text(String),
}

impl AnswerValue {
    fn same_kind(&self, other: &AnswerValue) -> bool {
        matches!(
            (self, other),
            (AnswerValue::Number(_), AnswerValue::Number(_))
                | (AnswerValue::Text(_), AnswerValue::Text(_))
        )
    }
}

impl PartialEq for AnswerValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnswerValue::Number(a), AnswerValue::Number(b)) => numbers_equal(a, b),
            (AnswerValue::Text(a), AnswerValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

// serde_json numbers are never NaN
impl Eq for AnswerValue {}

fn numbers_equal(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    a.as_f64() == b.as_f64()
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Number(value.into())
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub answer: AnswerValue,
    pub options: Vec<AnswerValue>,
    pub explanation: String,
    /// Open-ended category tag; lessons map it to an icon.
    #[serde(default)]
    pub concept: Option<String>,
}

impl Question {
    pub fn is_correct(&self, candidate: &AnswerValue) -> bool {
        *candidate == self.answer
    }

    /// Position of the correct answer within `options`.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| *option == self.answer)
    }

    /// Checks the shape rules every question in a bank has to satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("question id must not be empty".to_string());
        }
        if self.question.trim().is_empty() {
            return Err(format!("question {} has no text", self.id));
        }
        if self.options.len() < 2 {
            return Err(format!(
                "question {} needs at least 2 options, found {}",
                self.id,
                self.options.len()
            ));
        }
        if let Some(option) = self.options.iter().find(|o| !o.same_kind(&self.answer)) {
            return Err(format!(
                "question {} mixes answer types (option {})",
                self.id, option
            ));
        }

        let occurrences = self.options.iter().filter(|o| **o == self.answer).count();
        if occurrences != 1 {
            return Err(format!(
                "question {} must list its answer exactly once in options, found {}",
                self.id, occurrences
            ));
        }

        Ok(())
    }
}
