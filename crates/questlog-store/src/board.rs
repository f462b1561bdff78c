//! The board session: owns the task list and progress object, wires status
//! transitions to the engine, and persists both stores after every mutation.

use crate::adapter;
use crate::port::StoragePort;
use questlog_core::clock::Clock;
use questlog_core::engine::{self, AwardOutcome};
use questlog_core::task::{
    validate_description, validate_title, Task, TaskError, TaskPatch, TaskPriority, TaskStatus,
};
use questlog_core::{Achievement, Progress, TaskId};
use time::{Date, OffsetDateTime};

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    InvalidTask(#[from] TaskError),
    #[error("no task matches id {0}")]
    UnknownTask(String),
    #[error("id prefix {0} matches more than one task")]
    AmbiguousId(String),
}

/// Transient signal for the presentation layer, surfaced once via
/// [`Board::take_celebration`] and then cleared. When an award both levels
/// up and unlocks achievements, the level-up wins; the unlocks are still
/// recorded on the progress object.
#[derive(Debug, Clone, PartialEq)]
pub enum Celebration {
    LevelUp { level: u32 },
    AchievementUnlocked { achievement: Achievement },
}

pub struct Board {
    store: Box<dyn StoragePort>,
    clock: Box<dyn Clock>,
    tasks: Vec<Task>,
    progress: Progress,
    celebration: Option<Celebration>,
}

impl Board {
    /// Load tasks and progress from the store and start a session.
    pub fn open(store: Box<dyn StoragePort>, clock: Box<dyn Clock>) -> Self {
        let tasks = adapter::load_tasks(store.as_ref());
        let progress = adapter::load_progress(store.as_ref());
        Self {
            store,
            clock,
            tasks,
            progress,
            celebration: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Create a task (always `Todo`) and persist. Returns the new id.
    pub fn add_task(
        &mut self,
        title: &str,
        description: Option<String>,
        priority: TaskPriority,
        due_date: Option<Date>,
    ) -> Result<TaskId, BoardError> {
        let task = Task::new(title, description, priority, due_date, self.clock.now())?;
        let id = task.id.clone();
        self.tasks.push(task);
        self.persist();
        Ok(id)
    }

    /// Apply a partial update. A transition into `Done` from a non-`Done`
    /// status awards XP exactly once; re-saving a done task does not, and
    /// leaving `Done` never claws rewards back.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<(), BoardError> {
        let now = self.clock.now();
        // Validate before touching the task so a bad patch changes nothing.
        let title = patch.title.as_deref().map(validate_title).transpose()?;
        let description = match patch.description {
            Some(d) => Some(validate_description(Some(d))?),
            None => None,
        };

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BoardError::UnknownTask(id.to_string()))?;

        let was_done = task.status == TaskStatus::Done;
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = description;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = now;

        if matches!(patch.status, Some(TaskStatus::Done)) && !was_done {
            self.award(now);
        }
        self.persist();
        Ok(())
    }

    /// Move a task to a status.
    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<(), BoardError> {
        self.update_task(
            id,
            TaskPatch {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    /// Delete a task. Earned XP and achievements are untouched.
    pub fn delete_task(&mut self, id: &str) -> Result<(), BoardError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(BoardError::UnknownTask(id.to_string()));
        }
        self.persist();
        Ok(())
    }

    /// Resolve a full id or unique id prefix to a task id.
    pub fn resolve_id(&self, prefix: &str) -> Result<TaskId, BoardError> {
        if let Some(task) = self.tasks.iter().find(|t| t.id == prefix) {
            return Ok(task.id.clone());
        }
        let mut matches = self.tasks.iter().filter(|t| t.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task.id.clone()),
            (Some(_), Some(_)) => Err(BoardError::AmbiguousId(prefix.to_string())),
            (None, _) => Err(BoardError::UnknownTask(prefix.to_string())),
        }
    }

    /// Take the pending celebration, clearing it.
    pub fn take_celebration(&mut self) -> Option<Celebration> {
        self.celebration.take()
    }

    fn award(&mut self, now: OffsetDateTime) {
        let outcome = engine::award_xp(&self.progress, now);
        self.celebration = celebration_for(&outcome);
        self.progress = outcome.progress;
    }

    fn persist(&mut self) {
        adapter::save_tasks(self.store.as_mut(), &self.tasks);
        adapter::save_progress(self.store.as_mut(), &self.progress);
    }
}

fn celebration_for(outcome: &AwardOutcome) -> Option<Celebration> {
    if outcome.leveled_up {
        return Some(Celebration::LevelUp {
            level: outcome.progress.level,
        });
    }
    outcome
        .new_achievements
        .first()
        .cloned()
        .map(|achievement| Celebration::AchievementUnlocked { achievement })
}
