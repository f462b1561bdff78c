//! Static achievement catalog.
//!
//! Eight definitions, each with exactly one trigger kind. The catalog is
//! process-wide configuration and is never mutated at runtime; evaluation
//! order is catalog order.

use crate::types::{Achievement, Progress};
use time::OffsetDateTime;

/// Condition that unlocks an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Cumulative completed-task count reaches the threshold.
    Tasks { required: u64 },
    /// Consecutive-day streak reaches the threshold.
    Streak { required: u32 },
    /// Level reaches the threshold.
    Level { required: u32 },
}

impl Trigger {
    /// Whether the trigger threshold is met or exceeded.
    pub fn is_met(&self, progress: &Progress) -> bool {
        match self {
            Self::Tasks { required } => progress.total_tasks_completed >= *required,
            Self::Streak { required } => progress.streak >= *required,
            Self::Level { required } => progress.level >= *required,
        }
    }
}

/// One entry in the fixed catalog.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub trigger: Trigger,
}

impl AchievementDef {
    /// Stamp out an unlocked [`Achievement`] from this definition.
    pub fn unlock(&self, now: OffsetDateTime) -> Achievement {
        Achievement {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            unlocked_at: now,
        }
    }
}

pub const CATALOG: [AchievementDef; 8] = [
    AchievementDef {
        id: "first-task",
        title: "First Steps",
        description: "Complete your first task",
        icon: "🎯",
        trigger: Trigger::Tasks { required: 1 },
    },
    AchievementDef {
        id: "task-warrior",
        title: "Task Warrior",
        description: "Complete 10 tasks",
        icon: "⚔️",
        trigger: Trigger::Tasks { required: 10 },
    },
    AchievementDef {
        id: "task-master",
        title: "Task Master",
        description: "Complete 50 tasks",
        icon: "👑",
        trigger: Trigger::Tasks { required: 50 },
    },
    AchievementDef {
        id: "task-legend",
        title: "Task Legend",
        description: "Complete 100 tasks",
        icon: "🏆",
        trigger: Trigger::Tasks { required: 100 },
    },
    AchievementDef {
        id: "streak-starter",
        title: "Streak Starter",
        description: "Complete tasks 3 days in a row",
        icon: "🔥",
        trigger: Trigger::Streak { required: 3 },
    },
    AchievementDef {
        id: "streak-keeper",
        title: "Streak Keeper",
        description: "Complete tasks 7 days in a row",
        icon: "💪",
        trigger: Trigger::Streak { required: 7 },
    },
    AchievementDef {
        id: "level-5",
        title: "Rising Star",
        description: "Reach level 5",
        icon: "⭐",
        trigger: Trigger::Level { required: 5 },
    },
    AchievementDef {
        id: "level-10",
        title: "Productivity Pro",
        description: "Reach level 10",
        icon: "🚀",
        trigger: Trigger::Level { required: 10 },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_unique_ids() {
        assert_eq!(CATALOG.len(), 8);
        for (i, def) in CATALOG.iter().enumerate() {
            for other in &CATALOG[i + 1..] {
                assert_ne!(def.id, other.id);
            }
        }
    }

    #[test]
    fn task_trigger_boundaries() {
        let trigger = Trigger::Tasks { required: 10 };
        let mut progress = Progress::default();
        for (count, met) in [(9, false), (10, true), (11, true)] {
            progress.total_tasks_completed = count;
            assert_eq!(trigger.is_met(&progress), met);
        }
    }

    #[test]
    fn streak_and_level_triggers() {
        let progress = Progress {
            streak: 3,
            level: 5,
            ..Default::default()
        };
        assert!(Trigger::Streak { required: 3 }.is_met(&progress));
        assert!(!Trigger::Streak { required: 7 }.is_met(&progress));
        assert!(Trigger::Level { required: 5 }.is_met(&progress));
        assert!(!Trigger::Level { required: 10 }.is_met(&progress));
    }

    #[test]
    fn unlock_copies_definition_fields() {
        let now = time::macros::datetime!(2026-01-01 00:00 UTC);
        let achievement = CATALOG[0].unlock(now);
        assert_eq!(achievement.id, "first-task");
        assert_eq!(achievement.title, "First Steps");
        assert_eq!(achievement.unlocked_at, now);
    }
}
