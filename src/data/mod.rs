mod loader;

pub use loader::{LessonRepository, LoadError, parse_lesson_bank};
