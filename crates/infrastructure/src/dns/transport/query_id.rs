use std::sync::atomic::{AtomicU16, Ordering};

/// Monotonically increasing DNS transaction IDs, wrapping at `u16::MAX`.
///
/// The starting point is random so IDs do not restart at 1 on every launch.
#[derive(Debug)]
pub struct QueryIdGenerator {
    last: AtomicU16,
}

impl QueryIdGenerator {
    pub fn new() -> Self {
        Self::starting_after(fastrand::u16(..))
    }

    /// The first ID handed out will be `last.wrapping_add(1)`.
    pub fn starting_after(last: u16) -> Self {
        Self {
            last: AtomicU16::new(last),
        }
    }

    pub fn next_id(&self) -> u16 {
        self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }
}

impl Default for QueryIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
