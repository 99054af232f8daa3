use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::AppState;

/// Request-boundary hook plus response stamping.
///
/// Runs first for every route. For application routes it starts a fresh
/// metrics window before any handler code touches Redis; overlay routes are
/// exempt — a `/debug` poll must observe the in-flight window, not clear it.
///
/// After the handler returns, the accumulated driver totals are injected as
///
///   Server-Timing   — redis;dur=<ms>, standard format browsers chart
///   X-Redis-Calls   — number of driver operations this request issued
///
/// and a coloured one-liner goes to stdout for development.
pub async fn request_boundary(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    if !path.starts_with("/debug") {
        state.lens.on_request_start();
    }

    let mut response = next.run(req).await;

    let redis_ms = state.lens.duration() * 1000.0;
    let calls = state.lens.calls();

    // ── Inject response headers ─────────────────────────────────
    let server_timing = format!("redis;dur={redis_ms:.3}");
    if let Ok(val) = server_timing.parse() {
        response.headers_mut().insert("Server-Timing", val);
    }
    if let Ok(val) = calls.to_string().parse() {
        response.headers_mut().insert("X-Redis-Calls", val);
    }

    // ── Console log ─────────────────────────────────────────────
    let status = response.status().as_u16();
    let colour = match status {
        200..=299 => "\x1b[32m", // green
        400..=499 => "\x1b[33m", // yellow
        _ => "\x1b[31m",        // red
    };
    // Skip noisy overlay polls / SSE requests
    if path.starts_with("/api/") {
        println!(
            "  {colour}{status}\x1b[0m  {method:<5} {path:<30} redis {redis_ms:>8.3}ms × {calls}"
        );
    }

    response
}
