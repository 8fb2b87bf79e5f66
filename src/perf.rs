//! Performance instrumentation for the tick and render drivers.
//!
//! ## Features
//!
//! - **Scoped timers**: RAII timing for a block, warning when it overruns
//! - **Driver stats**: rolling durations of logic ticks or render frames
//! - **Conditional compilation**: `profile_scope!` is free without the
//!   `profiling` feature
//!
//! ```ignore
//! use wireboard::profile_scope;
//!
//! fn tick(&mut self) {
//!     profile_scope!("editor_tick");
//!     // ...
//! }
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

// ============================================================================
// Constants
// ============================================================================

/// Frame budget of the render driver at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Samples kept for rolling averages
const SAMPLE_COUNT: usize = 60;

/// A sample over `budget * WARN_THRESHOLD` counts as slow
const WARN_THRESHOLD: f64 = 2.0;

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros
// ============================================================================

/// Time the enclosing scope. Compiles to nothing without the `profiling`
/// feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// Enable or disable profiling output at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs a warning on drop if the scope ran longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the 1ms threshold used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

// ============================================================================
// Driver Stats
// ============================================================================

/// Rolling timing statistics for one periodic driver.
#[derive(Debug, Clone)]
pub struct DriverStats {
    name: &'static str,
    budget_ms: f64,
    samples: VecDeque<f64>,
    total: u64,
    slow: u64,
}

impl DriverStats {
    /// Stats for a driver expected to finish within `budget`.
    pub fn new(name: &'static str, budget: Duration) -> Self {
        Self {
            name,
            budget_ms: budget.as_secs_f64() * 1000.0,
            samples: VecDeque::with_capacity(SAMPLE_COUNT),
            total: 0,
            slow: 0,
        }
    }

    /// Record one run of the driver.
    pub fn record(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        if self.samples.len() >= SAMPLE_COUNT {
            self.samples.pop_front();
        }
        self.samples.push_back(ms);
        self.total += 1;

        if ms > self.budget_ms * WARN_THRESHOLD {
            self.slow += 1;
            warn!(
                driver = self.name,
                elapsed_ms = format!("{:.2}", ms),
                budget_ms = format!("{:.2}", self.budget_ms),
                "Driver overran its budget"
            );
        }
    }

    /// Time `f` and record it.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(start.elapsed());
        result
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn slow_count(&self) -> u64 {
        self.slow
    }

    /// Average over the recent samples.
    pub fn average_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn max_ms(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    pub fn log_summary(&self) {
        debug!(
            driver = self.name,
            runs = self.total,
            slow = self.slow,
            avg_ms = format!("{:.3}", self.average_ms()),
            max_ms = format!("{:.3}", self.max_ms()),
            "Driver summary"
        );
    }
}
