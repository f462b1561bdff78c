use questlog_store::Board;

pub fn execute(board: &mut Board, id: &str) -> anyhow::Result<()> {
    let id = board.resolve_id(id)?;
    board.delete_task(&id)?;
    println!("Deleted {id}");
    Ok(())
}
