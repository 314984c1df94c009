mod lesson;
mod question;

pub use lesson::{Difficulty, LessonBank, LessonInfo};
pub use question::{AnswerValue, Question};
