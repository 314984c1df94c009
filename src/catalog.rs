//! Lesson catalog and view routing.
//!
//! Every lesson the app knows about is listed here with its presentation
//! metadata, draw size and per-lesson message table. Routing resolves a
//! string key to a [`Route`]; unknown keys land on the home view.

use thiserror::Error;
use tracing::warn;

use crate::models::Difficulty;

/// Questions drawn per attempt unless an entry overrides it.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown lesson '{0}'")]
    UnknownLesson(String),
}

/// Display strings a lesson supplies to the generic quiz view.
#[derive(Debug, Clone, Copy)]
pub struct LessonMessages {
    /// Score messages for 100%, >= 80%, >= 60% and anything lower.
    pub score: [&'static str; 4],
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub concept_icons: &'static [(&'static str, &'static str)],
    pub default_icon: &'static str,
}

impl LessonMessages {
    pub fn score_message(&self, score: usize, total: usize) -> &'static str {
        if total > 0 && score >= total {
            return self.score[0];
        }
        let percentage = if total > 0 {
            score as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        match percentage {
            p if p >= 80.0 => self.score[1],
            p if p >= 60.0 => self.score[2],
            _ => self.score[3],
        }
    }

    pub fn feedback(&self, correct: bool) -> &'static str {
        if correct {
            self.correct
        } else {
            self.incorrect
        }
    }

    pub fn concept_icon(&self, concept: &str) -> &'static str {
        self.concept_icons
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(concept))
            .map(|(_, icon)| *icon)
            .unwrap_or(self.default_icon)
    }
}

#[derive(Debug)]
pub struct LessonEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub instructor: &'static str,
    pub icon: &'static str,
    pub difficulty: Difficulty,
    question_count: Option<usize>,
    pub messages: LessonMessages,
}

impl LessonEntry {
    /// Draw size for this lesson, falling back to `default`.
    pub fn question_count(&self, default: usize) -> usize {
        self.question_count.unwrap_or(default)
    }
}

pub const LESSONS: &[LessonEntry] = &[
    LessonEntry {
        id: "number-recognition",
        title: "Number Recognition",
        description: "Meet the numbers with Professor Tinkles",
        instructor: "Professor Tinkles",
        icon: "🔢",
        difficulty: Difficulty::Beginner,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You're a number recognition expert!",
                "Brilliant! You know your numbers very well!",
                "Good job! A few more practice sessions and you'll be purr-fect!",
                "Keep practicing! Learning numbers is the first step to becoming a math genius!",
            ],
            correct: "Excellent number recognition!",
            incorrect: "Let's practice numbers together.",
            concept_icons: &[
                ("Number Identification", "#"),
                ("Number Recognition", "🔢"),
                ("Number Sequence", "➕"),
                ("Number Comparison", "➖"),
                ("Number Order", "#"),
            ],
            default_icon: "#",
        },
    },
    LessonEntry {
        id: "counting",
        title: "Counting",
        description: "Count teacups, tools and clues",
        instructor: "Professor Tinkles",
        icon: "🔢",
        difficulty: Difficulty::Beginner,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect counting! You're a mathematical genius!",
                "Brilliant! You've mastered the basics of counting!",
                "Good job! A few more practice sessions and you'll be purr-fect!",
                "Keep practicing! Even the best mathematicians started with counting!",
            ],
            correct: "Excellent counting!",
            incorrect: "Let's count again together.",
            concept_icons: &[
                ("Basic Addition", "➕"),
                ("Basic Subtraction", "🧮"),
                ("Basic Multiplication", "#"),
                ("Basic Division", "🧮"),
                ("Skip Counting", "#"),
            ],
            default_icon: "🧮",
        },
    },
    LessonEntry {
        id: "arithmetic",
        title: "Arithmetic Lessons",
        description: "Learn basic math with Professor Tinkles",
        instructor: "Professor Tinkles",
        icon: "🐱",
        difficulty: Difficulty::Beginner,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You're a mathematical genius!",
                "Brilliant work! You've mastered the basics!",
                "Good job! A few more practice sessions and you'll be purr-fect!",
                "Keep practicing! Even the best mathematicians started somewhere!",
            ],
            correct: "Brilliant!",
            incorrect: "Not quite right.",
            concept_icons: &[
                ("Addition", "➕"),
                ("Subtraction", "➖"),
                ("Multiplication", "✖"),
                ("Division", "➗"),
            ],
            default_icon: "🔢",
        },
    },
    LessonEntry {
        id: "geometry",
        title: "Geometry Lessons",
        description: "Explore shapes with Sir Whiskersworth",
        instructor: "Sir Whiskersworth",
        icon: "📐",
        difficulty: Difficulty::Intermediate,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect geometry! You're a shape-shifting genius!",
                "Brilliant! Your geometric intuition is spot on!",
                "Good work! A few more angles and you'll be purr-fect!",
                "Keep practicing! Every great architect started with basic shapes!",
            ],
            correct: "Precisely measured!",
            incorrect: "Not quite the right angle.",
            concept_icons: &[
                ("triangle", "🔺"),
                ("circle", "⚪"),
                ("square", "⬜"),
                ("rectangle", "▭"),
            ],
            default_icon: "⚪",
        },
    },
    LessonEntry {
        id: "calculus",
        title: "Calculus Lessons",
        description: "Master derivatives and integrals with Professor Tinkles",
        instructor: "Professor Tinkles",
        icon: "📊",
        difficulty: Difficulty::Advanced,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Magnificent! You've mastered the fundamentals of calculus!",
                "Brilliant! Your calculus intuition is purr-fect!",
                "Excellent work! You're well on your way to calculus mastery!",
                "Keep practicing! Calculus is like a good cup of tea - it takes time to steep!",
            ],
            correct: "Calculus-tastic!",
            incorrect: "Not quite the right derivative.",
            concept_icons: &[
                ("Basic Derivatives", "🧮"),
                ("Linear Derivatives", "📈"),
                ("Basic Integration", "⚡"),
                ("Antiderivatives", "🧮"),
                ("Exponential Derivatives", "⚡"),
            ],
            default_icon: "🧮",
        },
    },
    LessonEntry {
        id: "set-theory",
        title: "Set Theory Lessons",
        description: "Explore unions, intersections, and complements with Lady Pawsington",
        instructor: "Lady Pawsington",
        icon: "🔗",
        difficulty: Difficulty::Intermediate,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Magnificent! You've mastered the fundamentals of set theory!",
                "Brilliant! Your set theory intuition is purr-fect!",
                "Excellent work! You're well on your way to set theory mastery!",
                "Keep practicing! Set theory is like organizing a cat's toy collection - it takes time to sort!",
            ],
            correct: "Set-tastic!",
            incorrect: "Not quite the right set operation.",
            concept_icons: &[
                ("Set Union", "➕"),
                ("Set Intersection", "➖"),
                ("Set Cardinality", "➕"),
                ("Set Difference", "➖"),
                ("Set Complement", "➕"),
            ],
            default_icon: "➕",
        },
    },
    LessonEntry {
        id: "statistics",
        title: "Statistics & Probability",
        description: "Master data analysis and chance with Lady Pawsington",
        instructor: "Lady Pawsington",
        icon: "📊",
        difficulty: Difficulty::Intermediate,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You're a statistical genius!",
                "Brilliant! Your data analysis skills are excellent!",
                "Good work! A few more practice sessions and you'll be purr-fect!",
                "Keep practicing! Statistics is like counting cat treats - it gets easier with practice!",
            ],
            correct: "Statistically significant!",
            incorrect: "Not quite the right calculation.",
            concept_icons: &[
                ("Mean", "📊"),
                ("Median", "📈"),
                ("Mode", "🥧"),
                ("Range", "📊"),
                ("Probability", "🥧"),
            ],
            default_icon: "📊",
        },
    },
    LessonEntry {
        id: "number-theory",
        title: "Number Theory",
        description: "Explore primes, factors, and sequences with Professor Tinkles",
        instructor: "Professor Tinkles",
        icon: "🔢",
        difficulty: Difficulty::Advanced,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Magnificent! You've mastered the beauty of numbers!",
                "Brilliant! Your number theory intuition is purr-fect!",
                "Excellent work! You're well on your way to number theory mastery!",
                "Keep practicing! Number theory is like a good cup of tea - it takes time to steep!",
            ],
            correct: "Number-tastic!",
            incorrect: "Not quite the right number.",
            concept_icons: &[
                ("Prime Numbers", "#"),
                ("Greatest Common Divisor", "🧮"),
                ("Fibonacci Sequence", "⚡"),
                ("Modular Arithmetic", "🧮"),
                ("Perfect Numbers", "#"),
            ],
            default_icon: "#",
        },
    },
    LessonEntry {
        id: "discrete-math",
        title: "Discrete Mathematics",
        description: "Solve combinatorial problems with Inspector Clawson",
        instructor: "Inspector Clawson",
        icon: "🔗",
        difficulty: Difficulty::Advanced,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Elementary, my dear student! You've solved the case of discrete mathematics!",
                "Brilliant deduction! Your combinatorial skills are purr-fect!",
                "Good work! A few more clues and you'll crack the case!",
                "Keep investigating! Every great detective started with basic counting!",
            ],
            correct: "Elementary, my dear student!",
            incorrect: "The game is afoot - let's try again!",
            concept_icons: &[
                ("Counting Principles", "📋"),
                ("Permutations", "🔀"),
                ("Combinations", "🕸"),
                ("Graph Theory", "🕸"),
                ("Lattice Paths", "🔀"),
            ],
            default_icon: "🔍",
        },
    },
    LessonEntry {
        id: "trigonometry",
        title: "Trigonometry",
        description: "Master angles and periodic functions with Sir Whiskersworth",
        instructor: "Sir Whiskersworth",
        icon: "📐",
        difficulty: Difficulty::Intermediate,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect trigonometry! You've mastered angles and ratios!",
                "Brilliant! Your trigonometric intuition is spot on!",
                "Good work! A few more angles and you'll be purr-fect!",
                "Keep practicing! Trigonometry is like measuring a cat's curiosity - it takes precision!",
            ],
            correct: "Precisely calculated!",
            incorrect: "Not quite the right angle.",
            concept_icons: &[
                ("Sine Function", "⚪"),
                ("Cosine Function", "🔺"),
                ("Tangent Function", "📈"),
                ("Inverse Trigonometry", "⚪"),
                ("Applications", "🔺"),
            ],
            default_icon: "📐",
        },
    },
    LessonEntry {
        id: "probability",
        title: "Probability",
        description: "Roll the dice on chance and odds",
        instructor: "Lady Pawsington",
        icon: "🎲",
        difficulty: Difficulty::Intermediate,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You've mastered probability!",
                "Excellent work! You understand probability very well!",
                "Good job! Keep practicing with probability!",
                "Don't worry! Probability takes time to master. Keep trying!",
            ],
            correct: "Excellent! You've calculated the probability correctly!",
            incorrect: "Don't worry! Probability takes practice. Keep working with combinations!",
            concept_icons: &[
                ("Basic Probability", "🎲"),
                ("Combinations", "🔢"),
                ("Conditional Probability", "🔍"),
                ("Expected Value", "💰"),
                ("Games", "🎮"),
            ],
            default_icon: "📚",
        },
    },
    LessonEntry {
        id: "algebra-basics",
        title: "Algebra Basics",
        description: "Balance equations and tame variables",
        instructor: "Lady Pawsington",
        icon: "🔤",
        difficulty: Difficulty::Beginner,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You've mastered algebra basics!",
                "Excellent work! You understand algebra very well!",
                "Good job! Keep practicing with variables and equations!",
                "Don't worry! Algebra takes time to master. Keep trying!",
            ],
            correct: "Excellent! You've solved the algebraic puzzle!",
            incorrect: "Don't worry! Algebra takes practice. Keep working with variables!",
            concept_icons: &[
                ("Variables", "🔤"),
                ("Equations", "⚖"),
                ("Graphing", "📊"),
            ],
            default_icon: "📚",
        },
    },
    LessonEntry {
        id: "fractions-decimals",
        title: "Fractions & Decimals",
        description: "Slice pies and line up decimal points",
        instructor: "Professor Tinkles",
        icon: "🥧",
        difficulty: Difficulty::Beginner,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You've mastered fractions and decimals!",
                "Excellent work! You understand fractions and decimals very well!",
                "Good job! Keep practicing with fractions and decimals!",
                "Don't worry! Fractions and decimals take time to master. Keep trying!",
            ],
            correct: "Excellent! You've got the hang of fractions and decimals!",
            incorrect: "Don't worry! Converting between fractions and decimals takes practice.",
            concept_icons: &[
                ("Fractions", "🥧"),
                ("Decimals", "📊"),
                ("Converting", "🔄"),
                ("Comparing", "⚖"),
                ("Operations", "🧮"),
            ],
            default_icon: "📚",
        },
    },
    LessonEntry {
        id: "applied-math",
        title: "Applied Mathematics",
        description: "Put math to work on real-world cases",
        instructor: "Inspector Clawson",
        icon: "🔬",
        difficulty: Difficulty::Intermediate,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You've mastered applied mathematics!",
                "Excellent work! You understand real-world applications!",
                "Good job! Keep practicing with applied problems!",
                "Don't worry! Applied math takes practice. Keep trying!",
            ],
            correct: "Excellent! You've solved the real-world problem!",
            incorrect: "Don't worry! Applied mathematics takes practice. Keep working with real scenarios!",
            concept_icons: &[
                ("Real-World Problems", "🌍"),
                ("Optimization", "⚡"),
                ("Modeling", "📈"),
                ("Data Analysis", "📊"),
                ("Problem Solving", "🧠"),
            ],
            default_icon: "📚",
        },
    },
    LessonEntry {
        id: "math-nature",
        title: "Mathematics in Nature",
        description: "Find spirals, symmetry and fractals in the garden",
        instructor: "Sir Whiskersworth",
        icon: "🌿",
        difficulty: Difficulty::Intermediate,
        question_count: None,
        messages: LessonMessages {
            score: [
                "Purr-fect! You've mastered mathematics in nature!",
                "Excellent work! You understand nature's mathematical patterns!",
                "Good job! Keep exploring the math in nature!",
                "Don't worry! Nature's mathematics takes time to appreciate. Keep observing!",
            ],
            correct: "Excellent! You've discovered nature's mathematical secrets!",
            incorrect: "Don't worry! Nature's patterns are complex. Keep exploring the mathematical beauty around us!",
            concept_icons: &[
                ("Fibonacci Sequence", "🐚"),
                ("Golden Ratio", "🌻"),
                ("Fractals", "🌿"),
                ("Symmetry", "🦋"),
                ("Patterns", "❄"),
            ],
            default_icon: "📚",
        },
    },
];

pub fn lookup(id: &str) -> Result<&'static LessonEntry, CatalogError> {
    LESSONS
        .iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| CatalogError::UnknownLesson(id.to_string()))
}

pub const HOME_KEY: &str = "home";
pub const TEA_TIME_KEY: &str = "tea-time";
pub const ACHIEVEMENTS_KEY: &str = "achievements";

/// Top-level views of the app.
#[derive(Debug, Clone, Copy)]
pub enum Route {
    Home,
    Lesson(&'static LessonEntry),
    TeaTime,
    Achievements,
}

impl Route {
    /// Resolve a view key. Unknown keys fall back to [`Route::Home`].
    pub fn resolve(key: &str) -> Route {
        match key {
            HOME_KEY => Route::Home,
            TEA_TIME_KEY | "break" => Route::TeaTime,
            ACHIEVEMENTS_KEY => Route::Achievements,
            _ => match lookup(key) {
                Ok(entry) => Route::Lesson(entry),
                Err(err) => {
                    warn!(%err, "routing to home");
                    Route::Home
                }
            },
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Route::Home => HOME_KEY,
            Route::Lesson(entry) => entry.id,
            Route::TeaTime => TEA_TIME_KEY,
            Route::Achievements => ACHIEVEMENTS_KEY,
        }
    }
}

/// One row of the home menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Home menu: every lesson, then the break and achievements views.
pub fn menu() -> Vec<MenuItem> {
    LESSONS
        .iter()
        .map(|entry| MenuItem {
            key: entry.id,
            title: entry.title,
            description: entry.description,
            icon: entry.icon,
        })
        .chain([
            MenuItem {
                key: TEA_TIME_KEY,
                title: "Tea Time Break",
                description: "Take a delightful British break",
                icon: "☕",
            },
            MenuItem {
                key: ACHIEVEMENTS_KEY,
                title: "Achievements",
                description: "View your mathematical progress",
                icon: "🏆",
            },
        ])
        .collect()
}
