use questlog_core::catalog::CATALOG;
use questlog_store::Board;

pub fn execute(board: &Board) -> anyhow::Result<()> {
    let progress = board.progress();
    for def in &CATALOG {
        match progress.achievements.iter().find(|a| a.id == def.id) {
            Some(unlocked) => println!(
                "{} {}: {} (unlocked {})",
                def.icon,
                def.title,
                def.description,
                unlocked.unlocked_at.date()
            ),
            None => println!("🔒 {}: {}", def.title, def.description),
        }
    }
    Ok(())
}
