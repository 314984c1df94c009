//! Achievement definitions and unlock tracking.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::progress::ProgramStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

pub struct AchievementDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    unlock: fn(&ProgramStats) -> bool,
}

impl fmt::Debug for AchievementDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AchievementDefinition")
            .field("id", &self.id)
            .field("rarity", &self.rarity)
            .finish()
    }
}

impl AchievementDefinition {
    pub fn is_satisfied(&self, stats: &ProgramStats) -> bool {
        (self.unlock)(stats)
    }
}

pub const ACHIEVEMENTS: &[AchievementDefinition] = &[
    AchievementDefinition {
        id: "first-lesson",
        title: "First Steps",
        description: "Complete your first math lesson",
        rarity: Rarity::Common,
        unlock: |stats| stats.lessons_completed >= 1,
    },
    AchievementDefinition {
        id: "perfect-score",
        title: "Purr-fect Score",
        description: "Get a perfect score on any lesson",
        rarity: Rarity::Rare,
        unlock: |stats| stats.perfect_scores >= 1,
    },
    AchievementDefinition {
        id: "math-master",
        title: "Mathematical Master",
        description: "Complete 5 lessons",
        rarity: Rarity::Epic,
        unlock: |stats| stats.lessons_completed >= 5,
    },
    AchievementDefinition {
        id: "perfectionist",
        title: "Perfectionist",
        description: "Get 3 perfect scores",
        rarity: Rarity::Legendary,
        unlock: |stats| stats.perfect_scores >= 3,
    },
];

/// Unlock latch for every achievement. Once set, an unlock is never cleared.
#[derive(Debug, Clone, Default)]
pub struct AchievementState {
    unlocked_at: HashMap<&'static str, DateTime<Utc>>,
}

impl AchievementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch every achievement `stats` satisfies and return the ones that
    /// were not unlocked before this call.
    pub fn evaluate(
        &mut self,
        stats: &ProgramStats,
        now: DateTime<Utc>,
    ) -> Vec<&'static AchievementDefinition> {
        let mut newly_unlocked = Vec::new();

        for achievement in ACHIEVEMENTS {
            if self.unlocked_at.contains_key(achievement.id) || !achievement.is_satisfied(stats) {
                continue;
            }
            self.unlocked_at.insert(achievement.id, now);
            info!(achievement = achievement.id, "achievement unlocked");
            newly_unlocked.push(achievement);
        }

        newly_unlocked
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked_at.contains_key(id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked_at.len()
    }

    /// All definitions in display order, paired with their unlock time.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (&'static AchievementDefinition, Option<DateTime<Utc>>)> + '_ {
        ACHIEVEMENTS
            .iter()
            .map(|a| (a, self.unlocked_at.get(a.id).copied()))
    }
}

/// Transient "new achievement" banner.
#[derive(Debug, Clone)]
pub struct AchievementNotice {
    pub achievements: Vec<&'static AchievementDefinition>,
    expires_at: Instant,
}

impl AchievementNotice {
    pub fn new(
        achievements: Vec<&'static AchievementDefinition>,
        shown_at: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            achievements,
            expires_at: shown_at + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
