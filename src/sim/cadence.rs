//! Tick-counting timers
//!
//! Everything time-based in the simulation counts frames, never wall clock.

use serde::{Deserialize, Serialize};

/// A counter that fires every `period` ticks and then starts over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    pub period: u32,
    pub count: u32,
}

impl Cadence {
    pub fn new(period: u32) -> Self {
        Self { period, count: 0 }
    }

    /// Count one tick. Returns true (and resets) when the period elapses.
    pub fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.period {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// A cooldown that becomes ready after `period` ticks and stays ready
/// (still counting) until explicitly reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    pub period: u32,
    pub elapsed: u32,
}

impl Cooldown {
    pub fn new(period: u32) -> Self {
        Self { period, elapsed: 0 }
    }

    pub fn advance(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.elapsed >= self.period
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}
