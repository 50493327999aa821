//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::WeakCache;

/// Shortest period the ticker accepts; a zero interval would panic in tokio.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a background task that sweeps `cache` once every `interval`.
///
/// The first sweep happens one full interval after spawning. Between ticks the
/// task sleeps without holding the cache lock. It ends when `shutdown` is
/// cancelled or when every strong handle to the cache has been dropped.
///
/// # Example
/// ```ignore
/// let handle = spawn_sweeper(cache.downgrade(), interval, token.clone());
/// // Later, during shutdown:
/// token.cancel();
/// handle.await?;
/// ```
pub(crate) fn spawn_sweeper(
    cache: WeakCache,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let period = interval.max(MIN_SWEEP_PERIOD);

    tokio::spawn(async move {
        info!("Starting cache sweeper with interval of {:?}", interval);

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("Cache sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {}
            }

            let Some(cache) = cache.upgrade() else {
                debug!("Cache dropped, sweeper exiting");
                break;
            };

            let removed = cache.sweep();
            if removed > 0 {
                debug!("Cache sweep: removed {} stale entries", removed);
            } else {
                debug!("Cache sweep: no stale entries found");
            }
        }
    })
}
