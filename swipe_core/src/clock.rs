//! Injected time source.
//!
//! Cooldown, debounce and double-blink windows all compare durations since
//! an arbitrary epoch. Production code samples a monotonic clock; tests
//! drive a [`ManualClock`] so timing behavior is deterministic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A source of "now", expressed as time elapsed since the clock's epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

// ════════════════════════════════════════════════════════════════════════════
// MonotonicClock — wall time for production use
// ════════════════════════════════════════════════════════════════════════════

/// Monotonic clock anchored at construction time.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock { epoch: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ManualClock — hand-advanced time for tests and scripted replay
// ════════════════════════════════════════════════════════════════════════════

/// Clock that only moves when told to. Cloning shares the underlying time,
/// so a test can hold one handle while the code under test holds another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    micros: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `t` past the epoch.
    pub fn at(t: Duration) -> Self {
        let clock = Self::new();
        clock.set(t);
        clock
    }

    pub fn set(&self, t: Duration) {
        self.micros.store(t.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn advance(&self, by: Duration) {
        self.micros
            .fetch_add(by.as_micros() as u64, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_zero() {
        assert_eq!(ManualClock::new().now(), Duration::ZERO);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(350));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::at(Duration::from_secs(1));
        let b = a.clone();
        a.advance(Duration::from_secs(2));
        assert_eq!(b.now(), Duration::from_secs(3));
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
