use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::StreamExt;

use super::view::LensResults;
use crate::AppState;

// ─── GET /debug/redis ────────────────────────────────────────────
/// Returns a single JSON snapshot of the current window — useful for
/// curl / debugging and for overlays that poll.

pub async fn get_results(State(state): State<Arc<AppState>>) -> Json<LensResults> {
    Json(state.lens.results())
}

// ─── GET /debug/redis/stream ─────────────────────────────────────
/// Server-Sent Events endpoint.
/// Pushes the current `{duration, calls}` as JSON every 500 ms so an
/// overlay widget can render live totals mid-request.

pub async fn results_stream(
    State(state): State<Arc<AppState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let interval = tokio::time::interval(Duration::from_millis(500));

    let stream = IntervalStream::new(interval).map(move |_| {
        let results = state.lens.results();
        let json = serde_json::to_string(&results).unwrap_or_default();
        Ok(Event::default().data(json))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
