pub mod connection;

pub use connection::TimedConnection;

use serde::Deserialize;

/// Which primitive a tracked operation is counted at.
///
/// The two points overlap — counting at both would double-count every
/// pipelined command — so exactly one is active per process, picked by
/// configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One call per driver round-trip. A pipeline of five commands is a
    /// single network exchange and counts as 1.
    #[default]
    RoundTrip,
    /// One call per protocol command in the payload. A pipeline of five
    /// commands counts as 5, matching what the server actually executes.
    PerCommand,
}
