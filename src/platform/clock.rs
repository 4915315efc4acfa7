//! Frame clock

use std::time::Instant;

/// Source of elapsed time between ticks
pub trait FrameClock {
    /// Milliseconds since the previous call (or since creation)
    fn elapsed_ms(&mut self) -> u64;
}

/// Wall clock backed by `Instant`
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn elapsed_ms(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        // Carry the sub-millisecond remainder into the next tick
        let whole_ms = elapsed.as_millis() as u64;
        self.last += std::time::Duration::from_millis(whole_ms);
        whole_ms
    }
}
