use questlog_core::task::TaskPriority;
use questlog_store::Board;
use time::macros::format_description;
use time::Date;

pub fn execute(
    board: &mut Board,
    title: &str,
    desc: Option<String>,
    priority: &str,
    due: Option<&str>,
) -> anyhow::Result<()> {
    let priority: TaskPriority = priority.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let due_date = due
        .map(|s| Date::parse(s, &format_description!("[year]-[month]-[day]")))
        .transpose()?;
    let id = board.add_task(title, desc, priority, due_date)?;
    println!("Added {id}");
    Ok(())
}
