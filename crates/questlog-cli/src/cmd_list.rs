use questlog_core::task::TaskStatus;
use questlog_store::Board;

pub fn execute(board: &Board, status: Option<&str>) -> anyhow::Result<()> {
    let filter = status
        .map(|s| s.parse::<TaskStatus>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut shown = 0;
    for task in board.tasks() {
        if filter.is_some_and(|f| f != task.status) {
            continue;
        }
        let due = task
            .due_date
            .map(|d| format!("  due {d}"))
            .unwrap_or_default();
        println!(
            "{}  [{}] ({}) {}{due}",
            short_id(&task.id),
            task.status,
            task.priority,
            task.title
        );
        shown += 1;
    }
    if shown == 0 {
        println!("No tasks.");
    }
    Ok(())
}

/// First characters of the id, enough to resolve with `resolve_id`.
fn short_id(id: &str) -> &str {
    &id[..id.len().min(13)]
}
