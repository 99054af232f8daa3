use std::sync::Arc;
use std::time::Instant;

use redis::aio::ConnectionLike;
use redis::{Cmd, Pipeline, RedisFuture, Value};

use crate::lens::counters::CommandCounters;

use super::Strategy;

// ─── Timed connection ────────────────────────────────────────────

/// Transparent timing decorator around any async Redis connection.
///
/// Implements `ConnectionLike` itself, so every `AsyncCommands` method works
/// on it unchanged — handlers never know they are instrumented. Each
/// round-trip is clocked from just before the inner send to just after the
/// reply, and fed to the shared counter pair on every exit path; an error
/// from the inner connection is recorded like any other completed call and
/// then returned to the caller untouched.
pub struct TimedConnection<C> {
    inner: C,
    counters: Arc<CommandCounters>,
    strategy: Strategy,
}

impl<C> TimedConnection<C> {
    pub fn new(inner: C, counters: Arc<CommandCounters>, strategy: Strategy) -> Self {
        Self {
            inner,
            counters,
            strategy,
        }
    }
}

// Clones share the same underlying connection handle and the same counter
// pair, mirroring how `ConnectionManager` clones share one multiplexed
// connection.
impl<C: Clone> Clone for TimedConnection<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            counters: self.counters.clone(),
            strategy: self.strategy,
        }
    }
}

impl<C> ConnectionLike for TimedConnection<C>
where
    C: ConnectionLike + Send,
{
    fn req_packed_command<'a>(&'a mut self, cmd: &'a Cmd) -> RedisFuture<'a, Value> {
        Box::pin(async move {
            let start = Instant::now();
            let result = self.inner.req_packed_command(cmd).await;
            self.counters.record(start.elapsed());
            result
        })
    }

    fn req_packed_commands<'a>(
        &'a mut self,
        pipeline: &'a Pipeline,
        offset: usize,
        count: usize,
    ) -> RedisFuture<'a, Vec<Value>> {
        Box::pin(async move {
            let calls = match self.strategy {
                Strategy::RoundTrip => 1,
                Strategy::PerCommand => pipeline.cmd_iter().count() as u64,
            };

            let start = Instant::now();
            let result = self.inner.req_packed_commands(pipeline, offset, count).await;
            self.counters.record_calls(start.elapsed(), calls);
            result
        })
    }

    fn get_db(&self) -> i64 {
        self.inner.get_db()
    }
}
