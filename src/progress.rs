//! Program-wide progress: lesson counters and achievement unlocks.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::achievements::{AchievementDefinition, AchievementState};
use crate::session::SessionSummary;

/// Counters accumulated over the whole run. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramStats {
    pub lessons_completed: usize,
    pub perfect_scores: usize,
    pub total_score: usize,
}

/// Owner of [`ProgramStats`] and [`AchievementState`].
///
/// The app holds one instance and passes it where it is read. The only
/// mutation is [`Progress::record_completion`], called when a session completes.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    stats: ProgramStats,
    achievements: AchievementState,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &ProgramStats {
        &self.stats
    }

    pub fn achievements(&self) -> &AchievementState {
        &self.achievements
    }

    /// Fold a completed session into the counters and re-evaluate
    /// achievements. Returns the achievements this completion unlocked.
    pub fn record_completion(
        &mut self,
        summary: SessionSummary,
        now: DateTime<Utc>,
    ) -> Vec<&'static AchievementDefinition> {
        self.stats.lessons_completed += 1;
        self.stats.total_score += summary.score;
        if summary.is_perfect() {
            self.stats.perfect_scores += 1;
        }

        info!(
            lessons_completed = self.stats.lessons_completed,
            perfect_scores = self.stats.perfect_scores,
            total_score = self.stats.total_score,
            "lesson recorded"
        );

        self.achievements.evaluate(&self.stats, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: usize, total: usize) -> SessionSummary {
        SessionSummary { score, total }
    }

    #[test]
    fn test_perfect_session_unlocks_perfect_score() {
        let mut progress = Progress::new();
        let unlocked = progress.record_completion(summary(5, 5), Utc::now());

        let ids: Vec<_> = unlocked.iter().map(|a| a.id).collect();
        assert_eq!(ids, ["first-lesson", "perfect-score"]);
        assert_eq!(progress.stats().perfect_scores, 1);
        assert_eq!(progress.stats().total_score, 5);
    }

    #[test]
    fn test_imperfect_session_keeps_perfect_score_locked() {
        let mut progress = Progress::new();
        progress.record_completion(summary(3, 5), Utc::now());

        assert!(!progress.achievements().is_unlocked("perfect-score"));
        assert!(progress.achievements().is_unlocked("first-lesson"));
        assert_eq!(progress.stats().perfect_scores, 0);
    }

    #[test]
    fn test_math_master_unlocks_on_fifth_lesson() {
        let mut progress = Progress::new();
        for _ in 0..4 {
            progress.record_completion(summary(2, 5), Utc::now());
            assert!(!progress.achievements().is_unlocked("math-master"));
        }

        let unlocked = progress.record_completion(summary(2, 5), Utc::now());
        assert!(unlocked.iter().any(|a| a.id == "math-master"));
        assert_eq!(progress.stats().lessons_completed, 5);
        assert_eq!(progress.stats().total_score, 10);
    }

    #[test]
    fn test_short_session_counts_as_perfect() {
        let mut progress = Progress::new();
        progress.record_completion(summary(1, 1), Utc::now());
        assert_eq!(progress.stats().perfect_scores, 1);
    }
}
