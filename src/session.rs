//! Quiz session state machine.
//!
//! One session covers one attempt at a lesson: a fixed draw of questions,
//! presented one at a time. Each question is first `Unanswered`, becomes
//! `Answered` once an option is picked, and is left with [`QuizSession::advance`].
//! Advancing past the last question completes the session and yields its
//! [`SessionSummary`] exactly once.

use rand::Rng;
use tracing::{debug, info};

use crate::models::{AnswerValue, LessonBank, LessonInfo, Question};
use crate::selector::select_questions;

/// Per-question sub-state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered {
        selected: AnswerValue,
        correct: bool,
    },
}

/// Result of picking an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score: usize,
}

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
}

impl SessionSummary {
    /// Every drawn question was answered correctly, whatever the draw size.
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// What a call to [`QuizSession::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Not allowed right now; state is unchanged.
    Ignored,
    /// Moved on to the question at this index.
    NextQuestion(usize),
    /// The session just completed.
    Completed(SessionSummary),
}

pub struct QuizSession {
    bank: LessonBank,
    count: usize,
    questions: Vec<Question>,
    index: usize,
    phase: Phase,
    score: usize,
    completed: bool,
}

impl QuizSession {
    /// Draw `count` questions from `bank` and start at the first one.
    pub fn start<R>(bank: LessonBank, count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let questions = select_questions(&bank.questions, count.max(1), rng);
        debug!(
            lesson = %bank.info.title,
            drawn = ?questions.iter().map(|q| q.id.as_str()).collect::<Vec<_>>(),
            "session started"
        );

        Self {
            bank,
            count,
            questions,
            index: 0,
            phase: Phase::Unanswered,
            score: 0,
            completed: false,
        }
    }

    pub fn info(&self) -> &LessonInfo {
        &self.bank.info
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_question_number(&self) -> usize {
        self.index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selected_answer(&self) -> Option<&AnswerValue> {
        match &self.phase {
            Phase::Answered { selected, .. } => Some(selected),
            Phase::Unanswered => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.phase, Phase::Answered { .. })
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Only meaningful once completed.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            total: self.questions.len(),
        }
    }

    /// Answer the current question.
    ///
    /// Returns `None` when the question was already answered or the session
    /// is over; a revealed answer never changes.
    pub fn select_answer(&mut self, candidate: &AnswerValue) -> Option<AnswerOutcome> {
        if self.completed || self.is_answered() {
            return None;
        }
        let question = self.questions.get(self.index)?;

        let correct = question.is_correct(candidate);
        if correct {
            self.score += 1;
        }
        debug!(
            question = %question.id,
            %candidate,
            correct,
            score = self.score,
            "answer evaluated"
        );

        self.phase = Phase::Answered {
            selected: candidate.clone(),
            correct,
        };

        Some(AnswerOutcome {
            correct,
            score: self.score,
        })
    }

    /// Leave the answered question for the next one, or complete the session.
    pub fn advance(&mut self) -> Advance {
        if self.completed || !self.is_answered() {
            return Advance::Ignored;
        }

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.phase = Phase::Unanswered;
            return Advance::NextQuestion(self.index);
        }

        self.completed = true;
        let summary = self.summary();
        info!(
            lesson = %self.bank.info.title,
            score = summary.score,
            total = summary.total,
            "session completed"
        );
        Advance::Completed(summary)
    }

    /// Start over with a fresh draw from the same bank. Only allowed once
    /// the session has completed.
    pub fn restart<R>(&mut self, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        if !self.completed {
            return false;
        }

        *self = Self::start(self.bank.clone(), self.count, rng);
        true
    }
}
