pub mod adapter;
pub mod board;
pub mod port;

pub use board::{Board, BoardError, Celebration};
pub use port::{FileStore, MemoryStore, NullStore, StoragePort};
