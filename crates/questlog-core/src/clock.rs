//! Injected time source so streak logic stays deterministic under test.

use time::OffsetDateTime;

/// Supplies "now" to the engine and the board.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock time in the local offset, falling back to UTC when the local
/// offset cannot be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// A clock pinned to a single instant. Used by tests and by embedders that
/// need reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
