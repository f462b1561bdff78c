use questlog_core::task::TaskStatus;
use questlog_store::{Board, Celebration};

pub fn execute(board: &mut Board, id: &str, status: TaskStatus) -> anyhow::Result<()> {
    let id = board.resolve_id(id)?;
    board.set_status(&id, status)?;
    println!("{id} is now {status}");

    if let Some(celebration) = board.take_celebration() {
        match celebration {
            Celebration::LevelUp { level } => {
                println!("🎉 Level up! You reached level {level}");
            }
            Celebration::AchievementUnlocked { achievement } => {
                println!(
                    "{} Achievement unlocked: {} ({})",
                    achievement.icon, achievement.title, achievement.description
                );
            }
        }
    }
    Ok(())
}
