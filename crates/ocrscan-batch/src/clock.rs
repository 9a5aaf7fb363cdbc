//! Time source used to measure OCR calls.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Time elapsed since `start`, never negative.
    fn elapsed_since(&self, start: Instant) -> Duration {
        self.now().saturating_duration_since(start)
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that advances by a fixed step on every reading.
///
/// With one reading before and one after each OCR call, every call appears
/// to take exactly `step`, which makes reports byte-for-byte reproducible.
#[derive(Debug)]
pub struct SteppingClock {
    origin: Instant,
    step: Duration,
    ticks: AtomicU32,
}

impl SteppingClock {
    /// Creates a clock advancing by `step` per reading.
    pub fn new(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            step,
            ticks: AtomicU32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.origin + self.step * tick
    }
}
