pub mod catalog;
pub mod clock;
pub mod engine;
pub mod task;
pub mod types;

pub use types::*;
