//! TTL Cleanup Task
//!
//! Background sweep that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, SharedCache};

/// Owns the background sweep over a shared cache.
///
/// The sweep runs from [`CacheSweeper::start`] until [`CacheSweeper::stop`]
/// is called or the sweeper is dropped.
///
/// # Example
/// ```ignore
/// let cache = TtlCache::<Value>::new(DEFAULT_TTL).into_shared();
/// let sweeper = CacheSweeper::start(cache.clone(), DEFAULT_CLEANUP_INTERVAL);
/// // Later, during shutdown:
/// sweeper.stop();
/// ```
#[derive(Debug)]
pub struct CacheSweeper {
    handle: JoinHandle<()>,
    interval: Duration,
}

impl CacheSweeper {
    /// Spawns the sweep on the current tokio runtime.
    ///
    /// Each tick sleeps for `interval`, then takes the write lock and calls
    /// `cleanup` on the cache.
    pub fn start<V, C>(cache: SharedCache<V, C>, interval: Duration) -> Self
    where
        V: Clone + Send + Sync + 'static,
        C: Clock + 'static,
    {
        let handle = tokio::spawn(async move {
            info!(interval = ?interval, "Starting TTL cleanup task");

            loop {
                tokio::time::sleep(interval).await;

                let (removed, remaining) = {
                    let mut cache_guard = cache.write().await;
                    let removed = cache_guard.cleanup();
                    (removed, cache_guard.len())
                };

                if removed > 0 {
                    info!(removed, remaining, "TTL cleanup: removed expired entries");
                } else {
                    debug!(remaining, "TTL cleanup: no expired entries found");
                }
            }
        });

        Self { handle, interval }
    }

    /// Interval between sweeps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while the sweep task is alive.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the sweep.
    pub fn stop(self) {
        // Drop aborts the task.
        info!("TTL cleanup task stopped");
    }
}

impl Drop for CacheSweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
