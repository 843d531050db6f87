//! Gravity schedule - a fixed-timestep periodic timer
//!
//! The game state owns exactly one schedule, so there is never more than one
//! gravity source. Time is fed in with [`GravityTimer::advance`]; each full
//! interval accumulated yields one fire. Stopping or re-arming discards any
//! partially accumulated period.

/// Periodic gravity timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl GravityTimer {
    /// Create a stopped timer with the given interval
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            running: false,
        }
    }

    /// Cancel any pending period and start a fresh one at `interval_ms`
    pub fn restart(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
        self.running = true;
    }

    /// Stop firing and discard the accumulated time
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next fire
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Accumulate elapsed time. Does nothing while stopped.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.running {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        }
    }

    /// Consume one due period. Returns true when gravity should step once.
    ///
    /// Call repeatedly until it returns false; the schedule may be stopped or
    /// re-armed between calls.
    pub fn try_fire(&mut self) -> bool {
        if self.running && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }
}
