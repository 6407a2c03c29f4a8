//! Auto-refresh scheduling capability.
//!
//! DESIGN
//! ======
//! The refresh loop only needs two facts from its environment: how often to
//! fire, and whether anyone is looking. Visibility is a shared flag so the
//! input side can flip it while the timer side reads it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Auto-refresh period used when none is configured.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(5 * 60);

/// Environment-provided timer facts for scheduled reloads.
pub trait Scheduler: Send + Sync {
    /// Time between scheduled reload cycles.
    fn period(&self) -> Duration;

    /// Whether the page is currently visible. Hidden pages skip scheduled
    /// cycles entirely.
    fn is_visible(&self) -> bool;
}

/// Fixed-period scheduler with a shared visibility flag. Starts visible.
#[derive(Clone, Debug)]
pub struct IntervalScheduler {
    period: Duration,
    visible: Arc<AtomicBool>,
}

impl IntervalScheduler {
    /// A zero period is clamped to one second so the interval timer stays valid.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_secs(1)),
            visible: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Flip visibility and return the new value.
    pub fn toggle_visible(&self) -> bool {
        !self.visible.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_PERIOD)
    }
}

impl Scheduler for IntervalScheduler {
    fn period(&self) -> Duration {
        self.period
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }
}
