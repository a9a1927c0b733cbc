pub mod events;
pub mod overlap;
pub mod topk;

pub use events::{prefix_events, PrefixEvent, Side};
pub use overlap::overlap;
pub use topk::{topk_join, TopPair};

/// Slack for the join's termination test. Without it, float jitter keeps
/// the event loop consuming events that can no longer change the output.
pub const TERMINATION_EPSILON: f64 = 1e-6;
