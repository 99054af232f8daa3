pub mod counters;
pub mod stream;
pub mod view;

pub use counters::{CommandCounters, CountersSnapshot};
pub use view::{LensResults, RedisView};
