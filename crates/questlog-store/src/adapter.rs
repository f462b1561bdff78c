//! Persistence adapter: (de)serializes the task list and progress object
//! through a [`StoragePort`], with legacy-schema migration on every load.
//!
//! Loads never fail: absent or corrupt data degrades to empty/default with a
//! warning, and write failures are logged and swallowed. Task and progress
//! loss is low-stakes; crashing over it is not.

use crate::port::{StoragePort, PROGRESS_KEY, TASKS_KEY};
use questlog_core::task::Task;
use questlog_core::Progress;
use serde_json::Value;

const EPOCH_RFC3339: &str = "1970-01-01T00:00:00Z";

/// Load the task list, migrating legacy records in-memory.
pub fn load_tasks(store: &dyn StoragePort) -> Vec<Task> {
    let raw = match store.get(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("task storage read failed: {e:#}");
            return Vec::new();
        }
    };
    let records: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("discarding corrupt task list: {e}");
            return Vec::new();
        }
    };
    records
        .into_iter()
        .filter_map(|record| match migrate_record(record) {
            Some(task) => Some(task),
            None => {
                tracing::warn!("dropping unreadable task record");
                None
            }
        })
        .collect()
}

/// Serialize and write the task list. Failures are logged, never raised.
pub fn save_tasks(store: &mut dyn StoragePort, tasks: &[Task]) {
    match serde_json::to_string(tasks) {
        Ok(json) => {
            if let Err(e) = store.set(TASKS_KEY, &json) {
                tracing::warn!("task storage write failed: {e:#}");
            }
        }
        Err(e) => tracing::warn!("task list serialization failed: {e}"),
    }
}

/// Load progress, or the all-zero default when absent or corrupt.
pub fn load_progress(store: &dyn StoragePort) -> Progress {
    let raw = match store.get(PROGRESS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Progress::default(),
        Err(e) => {
            tracing::warn!("progress storage read failed: {e:#}");
            return Progress::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(progress) => progress,
        Err(e) => {
            tracing::warn!("discarding corrupt progress record: {e}");
            Progress::default()
        }
    }
}

/// Serialize and write progress. Failures are logged, never raised.
pub fn save_progress(store: &mut dyn StoragePort, progress: &Progress) {
    match serde_json::to_string(progress) {
        Ok(json) => {
            if let Err(e) = store.set(PROGRESS_KEY, &json) {
                tracing::warn!("progress storage write failed: {e:#}");
            }
        }
        Err(e) => tracing::warn!("progress serialization failed: {e}"),
    }
}

/// Upgrade one stored record to the current schema, then deserialize.
///
/// Legacy records carry a boolean `completed` instead of `status` and may
/// lack `priority` or timestamps. Applied on every load; the stored bytes
/// are only rewritten on the next save.
fn migrate_record(mut value: Value) -> Option<Task> {
    let obj = value.as_object_mut()?;

    if !obj.contains_key("status") {
        let done = obj
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let status = if done { "done" } else { "todo" };
        obj.insert("status".to_string(), Value::String(status.to_string()));
    }
    obj.remove("completed");

    if !obj.contains_key("priority") {
        obj.insert("priority".to_string(), Value::String("medium".to_string()));
    }

    for field in ["createdAt", "updatedAt"] {
        if !obj.contains_key(field) {
            obj.insert(field.to_string(), Value::String(EPOCH_RFC3339.to_string()));
        }
    }

    // Legacy due dates were full datetimes; keep the calendar-date part.
    if let Some(date_part) = obj
        .get("dueDate")
        .and_then(Value::as_str)
        .filter(|due| due.len() > 10)
        .and_then(|due| due.get(..10))
        .map(str::to_string)
    {
        obj.insert("dueDate".to_string(), Value::String(date_part));
    }

    if obj
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
        .is_empty()
    {
        return None;
    }

    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::MemoryStore;
    use questlog_core::task::{TaskPriority, TaskStatus};
    use time::macros::{date, datetime};

    fn sample_tasks() -> Vec<Task> {
        let now = datetime!(2026-03-01 09:00 UTC);
        let mut walk = Task::new("walk the dog", None, TaskPriority::Low, None, now).unwrap();
        walk.status = TaskStatus::Done;
        let report = Task::new(
            "quarterly report",
            Some("numbers for Q1".to_string()),
            TaskPriority::High,
            Some(date!(2026 - 03 - 15)),
            now,
        )
        .unwrap();
        vec![walk, report]
    }

    #[test]
    fn round_trip_is_lossless() {
        let mut store = MemoryStore::new();
        let tasks = sample_tasks();
        save_tasks(&mut store, &tasks);
        assert_eq!(load_tasks(&store), tasks);
    }

    #[test]
    fn absent_keys_yield_defaults() {
        let store = MemoryStore::new();
        assert!(load_tasks(&store).is_empty());
        assert_eq!(load_progress(&store), Progress::default());
    }

    #[test]
    fn corrupt_data_yields_defaults() {
        let mut store = MemoryStore::new();
        store.set(TASKS_KEY, "not json").unwrap();
        store.set(PROGRESS_KEY, "{broken").unwrap();
        assert!(load_tasks(&store).is_empty());
        assert_eq!(load_progress(&store), Progress::default());
    }

    #[test]
    fn legacy_completed_record_migrates() {
        let mut store = MemoryStore::new();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"task_1","title":"old","completed":true}]"#,
            )
            .unwrap();
        let tasks = load_tasks(&store);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Done);
        assert_eq!(tasks[0].priority, TaskPriority::Medium);
    }

    #[test]
    fn legacy_uncompleted_record_becomes_todo() {
        let mut store = MemoryStore::new();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"task_2","title":"pending","completed":false}]"#,
            )
            .unwrap();
        let tasks = load_tasks(&store);
        assert_eq!(tasks[0].status, TaskStatus::Todo);
    }

    #[test]
    fn missing_priority_defaults_to_medium() {
        let mut store = MemoryStore::new();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"task_3","title":"t","status":"in-progress","createdAt":"2026-01-01T00:00:00Z","updatedAt":"2026-01-01T00:00:00Z"}]"#,
            )
            .unwrap();
        let tasks = load_tasks(&store);
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
        assert_eq!(tasks[0].priority, TaskPriority::Medium);
    }

    #[test]
    fn legacy_datetime_due_date_is_truncated() {
        let mut store = MemoryStore::new();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"task_4","title":"t","completed":false,"dueDate":"2026-03-15T00:00:00.000Z"}]"#,
            )
            .unwrap();
        let tasks = load_tasks(&store);
        assert_eq!(tasks[0].due_date, Some(date!(2026 - 03 - 15)));
    }

    #[test]
    fn titleless_records_are_dropped() {
        let mut store = MemoryStore::new();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"task_5","completed":true},{"id":"task_6","title":"  ","completed":true},{"id":"task_7","title":"kept","completed":true}]"#,
            )
            .unwrap();
        let tasks = load_tasks(&store);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "kept");
    }

    #[test]
    fn progress_round_trips() {
        let mut store = MemoryStore::new();
        let progress = Progress {
            xp: 120,
            level: 2,
            streak: 4,
            last_completion_date: Some(datetime!(2026-03-01 09:00 UTC)),
            achievements: vec![questlog_core::catalog::CATALOG[0]
                .unlock(datetime!(2026-02-20 08:00 UTC))],
            total_tasks_completed: 12,
        };
        save_progress(&mut store, &progress);
        assert_eq!(load_progress(&store), progress);
    }
}
