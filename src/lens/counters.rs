use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

// ─── Counter pair ────────────────────────────────────────────────

/// Process-wide accumulator pair for the current request window.
///
/// Every instrumented round-trip calls `record()`; the boundary middleware
/// calls `reset()` when a new request starts; the view calls `snapshot()`
/// whenever the overlay asks. All three may run concurrently — both fields
/// are plain relaxed atomics, so increments are wait-free and nothing is
/// ever held across an awaited driver call.
///
/// A `record` in flight when `reset` fires may land on either side of the
/// boundary. That skews one window by at most one call and is accepted.
#[derive(Debug, Default)]
pub struct CommandCounters {
    /// Total wall-clock nanoseconds spent inside tracked driver calls.
    command_nanos: AtomicU64,
    /// Number of tracked operations issued.
    command_count: AtomicU64,
}

/// Independently-atomic reads of both accumulators.
/// Not a joint snapshot — the view formats the two fields separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountersSnapshot {
    pub elapsed: Duration,
    pub calls: u64,
}

impl CommandCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute one operation and its elapsed wall time to the current
    /// window. Called once per round-trip on every exit path, success or
    /// error.
    pub fn record(&self, elapsed: Duration) {
        self.record_calls(elapsed, 1);
    }

    /// Attribute `calls` operations to a single timed round-trip.
    /// A pipeline is one round-trip but may carry many commands.
    pub fn record_calls(&self, elapsed: Duration, calls: u64) {
        // u64 nanoseconds covers ~584 years; saturate rather than wrap.
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.command_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.command_count.fetch_add(calls, Ordering::Relaxed);
    }

    /// Zero both accumulators for a fresh request window.
    pub fn reset(&self) {
        self.command_nanos.store(0, Ordering::Relaxed);
        self.command_count.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            elapsed: Duration::from_nanos(self.command_nanos.load(Ordering::Relaxed)),
            calls: self.command_count.load(Ordering::Relaxed),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────
