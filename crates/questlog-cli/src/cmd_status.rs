use questlog_core::catalog::CATALOG;
use questlog_core::engine;
use questlog_store::Board;

const BAR_WIDTH: u64 = 20;

pub fn execute(board: &Board) -> anyhow::Result<()> {
    let progress = board.progress();
    let lp = engine::level_progress(progress.xp);
    let filled = (lp.current * BAR_WIDTH / lp.required) as usize;
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH as usize - filled)
    );

    println!(
        "Level {}  [{bar}] {}/{} XP",
        progress.level, lp.current, lp.required
    );
    println!("Total XP: {}", progress.xp);
    println!("Streak: {} day(s)", progress.streak);
    println!("Tasks completed: {}", progress.total_tasks_completed);
    println!(
        "Achievements: {}/{}",
        progress.achievements.len(),
        CATALOG.len()
    );
    Ok(())
}
