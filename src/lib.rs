//! Per-request Redis instrumentation for a debugging overlay.
//!
//! The lens wraps the application's shared Redis connection once at startup
//! and transparently times every driver round-trip. Totals accumulate in a
//! wait-free counter pair, reset at each request boundary, and surface as
//! `{duration, calls}` through the `/debug/redis` endpoints and a
//! `Server-Timing` response header.

pub mod config;
pub mod handlers;
pub mod instrument;
pub mod lens;
pub mod middleware;
pub mod redis_client;
pub mod seed;
pub mod server;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// The instrumented Redis handle — clones share one multiplexed
    /// connection and one counter pair.
    pub redis: instrument::TimedConnection<redis::aio::ConnectionManager>,

    /// Read side of the lens — the boundary middleware resets through it,
    /// the overlay endpoints read through it.
    pub lens: lens::RedisView,
}
