//! Batch collection of a week's matches: fetch, normalize, append.

mod match_collector;
pub mod throttle;

pub use match_collector::collect;
pub use throttle::{BatchThrottle, Throttle, Unthrottled};
