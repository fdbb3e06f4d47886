//! Cache Module
//!
//! Provides an in-memory key-value cache with per-entry TTL expiration.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::{saturating_millis, CacheEntry};
pub use stats::CacheStats;
pub use store::{SharedCache, TtlCache};

use std::time::Duration;

// == Public Constants ==
/// TTL applied when a caller does not choose one (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Interval between background sweeps (10 minutes)
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(10 * 60);
