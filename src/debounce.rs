//! Debounce gates - turn a held button into discrete trigger edges.
//!
//! Input is polled once per tick as a level ("is the button down right now"),
//! so a held key would fire on every tick. A [`DebounceGate`] accepts at most
//! one trigger per interval, which gives edge-like behavior without OS-level
//! key-down events.

use crate::constants::DEFAULT_DEBOUNCE_MS;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Millisecond time source read by debounce gates.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ms: u64) -> Self {
        let clock = Self::new();
        clock.set(ms);
        clock
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::Relaxed);
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}

/// Minimum-interval trigger filter.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    interval_ms: u64,
    last_accepted: Option<u64>,
}

impl DebounceGate {
    pub fn new(interval: Duration) -> Self {
        Self::with_interval_ms(interval.as_millis() as u64)
    }

    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_accepted: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Poll the gate against `clock`. Returns true at most once per interval.
    pub fn poll(&mut self, clock: &dyn Clock) -> bool {
        self.poll_at(clock.now_ms())
    }

    /// Poll the gate at an explicit time in milliseconds.
    ///
    /// The first poll always fires. Afterwards the elapsed time must strictly
    /// exceed the interval, and an accepted poll restarts the interval.
    pub fn poll_at(&mut self, now_ms: u64) -> bool {
        let fires = match self.last_accepted {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.interval_ms,
        };
        if fires {
            self.last_accepted = Some(now_ms);
        }
        fires
    }

    /// Forget the last accepted trigger.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::with_interval_ms(DEFAULT_DEBOUNCE_MS)
    }
}
