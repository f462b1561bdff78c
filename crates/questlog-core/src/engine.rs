//! Pure progress engine: level math, streak classification, achievement
//! checks, and the single `award_xp` transition.
//!
//! No I/O and no ambient clock; callers pass "now" in. Streak semantics: a
//! completion on a non-consecutive day restarts the streak at exactly 1,
//! never extending the stale count (`restart_resets_streak_to_one`).

use crate::catalog::CATALOG;
use crate::types::{Achievement, Progress, XP_PER_LEVEL, XP_PER_TASK};
use time::OffsetDateTime;

/// Level derived from cumulative XP: `xp / 100 + 1`.
pub fn level_for_xp(xp: u64) -> u32 {
    (xp / XP_PER_LEVEL) as u32 + 1
}

/// Display-only breakdown of progress within the current level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub current: u64,
    pub required: u64,
    pub percentage: f64,
}

/// XP earned within the current level, out of [`XP_PER_LEVEL`].
pub fn level_progress(xp: u64) -> LevelProgress {
    let current = xp % XP_PER_LEVEL;
    LevelProgress {
        current,
        required: XP_PER_LEVEL,
        percentage: current as f64 / XP_PER_LEVEL as f64 * 100.0,
    }
}

/// How a completion relates to the streak, by calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already completed something today; streak unchanged.
    AlreadyCounted,
    /// Last completion was exactly yesterday; streak extends by one.
    Extended,
    /// No prior completion, a gap of two or more days, or a timestamp in
    /// the future; streak restarts at 1.
    Restarted,
}

/// Classify a completion at `now` against the previous completion.
pub fn classify_completion(
    last_completion: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> StreakChange {
    let Some(last) = last_completion else {
        return StreakChange::Restarted;
    };
    let today = now.date();
    let last_day = last.date();
    if last_day == today {
        StreakChange::AlreadyCounted
    } else if today.previous_day() == Some(last_day) {
        StreakChange::Extended
    } else {
        StreakChange::Restarted
    }
}

/// Catalog entries newly satisfied by `progress` and not yet unlocked,
/// in catalog order, stamped with `now`.
pub fn check_achievements(progress: &Progress, now: OffsetDateTime) -> Vec<Achievement> {
    CATALOG
        .iter()
        .filter(|def| !progress.has_achievement(def.id))
        .filter(|def| def.trigger.is_met(progress))
        .map(|def| def.unlock(now))
        .collect()
}

/// Result of one XP award.
#[derive(Debug, Clone)]
pub struct AwardOutcome {
    pub progress: Progress,
    pub leveled_up: bool,
    pub streak_change: StreakChange,
    pub new_achievements: Vec<Achievement>,
}

/// The single transition that changes xp, level, streak, completion count,
/// and achievements. Invoked exactly once per task entering done status.
pub fn award_xp(progress: &Progress, now: OffsetDateTime) -> AwardOutcome {
    let old_level = progress.level;
    let xp = progress.xp.saturating_add(XP_PER_TASK);
    let level = level_for_xp(xp);

    let streak_change = classify_completion(progress.last_completion_date, now);
    let streak = match streak_change {
        StreakChange::AlreadyCounted => progress.streak,
        StreakChange::Extended => progress.streak + 1,
        StreakChange::Restarted => 1,
    };

    let mut updated = Progress {
        xp,
        level,
        streak,
        last_completion_date: Some(now),
        achievements: progress.achievements.clone(),
        total_tasks_completed: progress.total_tasks_completed + 1,
    };

    let new_achievements = check_achievements(&updated, now);
    updated.achievements.extend(new_achievements.iter().cloned());

    AwardOutcome {
        progress: updated,
        leveled_up: level > old_level,
        streak_change,
        new_achievements,
    }
}
