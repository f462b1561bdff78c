use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// XP granted for each task completed.
pub const XP_PER_TASK: u64 = 10;

/// XP required to advance one level.
pub const XP_PER_LEVEL: u64 = 100;

/// Task ID format: `task_<ulid>`
pub type TaskId = String;

/// Stable achievement identifier from the catalog (e.g. "first-task").
pub type AchievementId = String;

/// Cumulative progress for a single user. Created once with all-zero
/// defaults and mutated only by [`crate::engine::award_xp`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub xp: u64,
    pub level: u32,
    pub streak: u32,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub last_completion_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub total_tasks_completed: u64,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            streak: 0,
            last_completion_date: None,
            achievements: Vec::new(),
            total_tasks_completed: 0,
        }
    }
}

impl Progress {
    /// Whether an achievement with the given id has already been unlocked.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }
}

/// An unlocked badge. Immutable once created; the set of achievements on a
/// [`Progress`] only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(with = "time::serde::rfc3339")]
    pub unlocked_at: OffsetDateTime,
}
