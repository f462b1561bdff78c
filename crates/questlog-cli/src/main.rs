mod cmd_achievements;
mod cmd_add;
mod cmd_list;
mod cmd_rm;
mod cmd_set_status;
mod cmd_status;

use clap::{Parser, Subcommand};
use questlog_core::clock::SystemClock;
use questlog_core::task::TaskStatus;
use questlog_store::{Board, FileStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "questlog", version, about = "Gamified task tracking from the terminal")]
struct Cli {
    /// Data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task to the board
    Add {
        /// Task title
        title: String,
        /// Longer description
        #[arg(long)]
        desc: Option<String>,
        /// Priority: low, medium, or high
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks, optionally filtered by status
    List {
        /// Filter: todo, in-progress, or done
        #[arg(long)]
        status: Option<String>,
    },
    /// Move a task to in-progress
    Start {
        /// Task id or unique prefix
        id: String,
    },
    /// Mark a task done
    Done {
        /// Task id or unique prefix
        id: String,
    },
    /// Move a task back to todo
    Reopen {
        /// Task id or unique prefix
        id: String,
    },
    /// Delete a task
    Rm {
        /// Task id or unique prefix
        id: String,
    },
    /// Show level, XP, and streak
    Status,
    /// List unlocked and locked achievements
    Achievements,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let root = cli.data_dir.unwrap_or_else(FileStore::default_root);
    let store = FileStore::open(root)?;
    let mut board = Board::open(Box::new(store), Box::new(SystemClock));

    match cli.cmd {
        Command::Add {
            title,
            desc,
            priority,
            due,
        } => cmd_add::execute(&mut board, &title, desc, &priority, due.as_deref()),
        Command::List { status } => cmd_list::execute(&board, status.as_deref()),
        Command::Start { id } => cmd_set_status::execute(&mut board, &id, TaskStatus::InProgress),
        Command::Done { id } => cmd_set_status::execute(&mut board, &id, TaskStatus::Done),
        Command::Reopen { id } => cmd_set_status::execute(&mut board, &id, TaskStatus::Todo),
        Command::Rm { id } => cmd_rm::execute(&mut board, &id),
        Command::Status => cmd_status::execute(&board),
        Command::Achievements => cmd_achievements::execute(&board),
    }
}
