use std::sync::Arc;

use serde::Serialize;

use super::counters::CommandCounters;

// ─── Reporting view ──────────────────────────────────────────────

/// Read side of the lens: formats the counter pair for the overlay and owns
/// the reset trigger. The view itself is stateless — all state lives in the
/// shared `CommandCounters`, so clones are cheap and interchangeable.
#[derive(Debug, Clone)]
pub struct RedisView {
    counters: Arc<CommandCounters>,
}

/// What the overlay renders: `{"duration":"42ms","calls":3}`.
#[derive(Debug, Clone, Serialize)]
pub struct LensResults {
    pub duration: String,
    pub calls: u64,
}

impl RedisView {
    pub fn new(counters: Arc<CommandCounters>) -> Self {
        Self { counters }
    }

    /// Total driver time this window, in seconds.
    pub fn duration(&self) -> f64 {
        self.counters.snapshot().elapsed.as_secs_f64()
    }

    /// Driver time as a display string in milliseconds.
    /// Sub-second totals round to whole ms; one second and up keeps two
    /// decimals so slow requests still read precisely.
    pub fn formatted_duration(&self) -> String {
        let ms = self.duration() * 1000.0;
        if ms >= 1000.0 {
            format!("{ms:.2}ms")
        } else {
            format!("{ms:.0}ms")
        }
    }

    /// Number of driver operations this window.
    pub fn calls(&self) -> u64 {
        self.counters.snapshot().calls
    }

    /// Composite read for the overlay widget.
    pub fn results(&self) -> LensResults {
        LensResults {
            duration: self.formatted_duration(),
            calls: self.calls(),
        }
    }

    /// Request-boundary hook: a new request window begins, drop the
    /// previous window's totals.
    pub fn on_request_start(&self) {
        self.counters.reset();
    }
}

// ─── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn view_with(elapsed: Duration, calls: u64) -> RedisView {
        let counters = Arc::new(CommandCounters::new());
        counters.record_calls(elapsed, calls);
        RedisView::new(counters)
    }

    #[test]
    fn sub_second_durations_round_to_whole_ms() {
        assert_eq!(view_with(Duration::from_millis(42), 1).formatted_duration(), "42ms");
        // 0.9 ms rounds up to the nearest whole millisecond
        assert_eq!(view_with(Duration::from_micros(900), 1).formatted_duration(), "1ms");
    }

    #[test]
    fn second_and_up_keeps_two_decimals() {
        assert_eq!(view_with(Duration::from_secs(1), 1).formatted_duration(), "1000.00ms");
        assert_eq!(
            view_with(Duration::from_micros(1_234_500), 3).formatted_duration(),
            "1234.50ms"
        );
    }

    #[test]
    fn empty_window_renders_zero() {
        let view = RedisView::new(Arc::new(CommandCounters::new()));
        let results = view.results();
        assert_eq!(results.duration, "0ms");
        assert_eq!(results.calls, 0);
    }

    #[test]
    fn results_serialize_for_the_overlay() {
        let json = serde_json::to_string(&view_with(Duration::from_millis(5), 1).results())
            .expect("serialize");
        assert_eq!(json, r#"{"duration":"5ms","calls":1}"#);
    }

    #[test]
    fn request_start_clears_the_window() {
        let view = view_with(Duration::from_millis(15), 3);
        view.on_request_start();
        assert_eq!(view.calls(), 0);
        assert_eq!(view.duration(), 0.0);
    }
}
