//! Task model and the free-form Kanban status machine.
//!
//! Any status may follow any other; the reward side effect (exactly one XP
//! award per transition *into* done) is enforced by the board, not here.

use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, OffsetDateTime};

/// Maximum title length after trimming.
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum description length.
pub const DESCRIPTION_MAX_LEN: usize = 500;

// Wire format for due dates: "2026-03-15"
time::serde::format_description!(due_date_fmt, Date, "[year]-[month]-[day]");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("task title exceeds {TITLE_MAX_LEN} characters")]
    TitleTooLong,
    #[error("task description exceeds {DESCRIPTION_MAX_LEN} characters")]
    DescriptionTooLong,
}

/// Kanban column a task sits in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(format!("unknown task status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown task priority: {other}")),
        }
    }
}

/// A single Kanban card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(with = "due_date_fmt::option", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

fn new_task_id() -> TaskId {
    format!("task_{}", ulid::Ulid::new().to_string().to_lowercase())
}

/// Validate and trim a candidate title.
pub fn validate_title(title: &str) -> Result<String, TaskError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if trimmed.chars().count() > TITLE_MAX_LEN {
        return Err(TaskError::TitleTooLong);
    }
    Ok(trimmed.to_string())
}

/// Validate a candidate description; `None` clears it.
pub fn validate_description(description: Option<String>) -> Result<Option<String>, TaskError> {
    match description {
        Some(d) if d.chars().count() > DESCRIPTION_MAX_LEN => Err(TaskError::DescriptionTooLong),
        Some(d) if d.trim().is_empty() => Ok(None),
        other => Ok(other),
    }
}

impl Task {
    /// Create a new task. Status always starts at `Todo`.
    pub fn new(
        title: &str,
        description: Option<String>,
        priority: TaskPriority,
        due_date: Option<Date>,
        now: OffsetDateTime,
    ) -> Result<Self, TaskError> {
        Ok(Self {
            id: new_task_id(),
            title: validate_title(title)?,
            description: validate_description(description)?,
            status: TaskStatus::Todo,
            priority,
            due_date,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update applied by `Board::update_task`. `None` fields are left
/// untouched; a `Some` description that is blank clears it.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Option<Date>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn now() -> OffsetDateTime {
        datetime!(2026-03-01 09:00 UTC)
    }

    #[test]
    fn new_task_starts_todo_with_trimmed_title() {
        let task = Task::new("  write report  ", None, TaskPriority::High, None, now()).unwrap();
        assert_eq!(task.title, "write report");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, TaskPriority::High);
        assert!(task.id.starts_with("task_"));
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = Task::new("   ", None, TaskPriority::Medium, None, now()).unwrap_err();
        assert_eq!(err, TaskError::EmptyTitle);
    }

    #[test]
    fn overlong_title_is_rejected() {
        let title = "x".repeat(TITLE_MAX_LEN + 1);
        let err = Task::new(&title, None, TaskPriority::Medium, None, now()).unwrap_err();
        assert_eq!(err, TaskError::TitleTooLong);
    }

    #[test]
    fn overlong_description_is_rejected() {
        let desc = "x".repeat(DESCRIPTION_MAX_LEN + 1);
        let err = Task::new("ok", Some(desc), TaskPriority::Medium, None, now()).unwrap_err();
        assert_eq!(err, TaskError::DescriptionTooLong);
    }

    #[test]
    fn blank_description_is_cleared() {
        let task = Task::new("ok", Some("  ".to_string()), TaskPriority::Low, None, now()).unwrap();
        assert!(task.description.is_none());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            let parsed: TaskStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("doing".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn due_date_serializes_as_plain_date() {
        let task = Task::new(
            "dated",
            None,
            TaskPriority::Medium,
            Some(time::macros::date!(2026 - 03 - 15)),
            now(),
        )
        .unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2026-03-15");
    }
}
