//! TTL Cleanup Task
//!
//! Background task that periodically removes stale pages from the page cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PageCache;

/// Spawns a background task that periodically purges stale pages.
///
/// Reads never delete stale pages, so without this task they would linger
/// until overwritten or evicted.
///
/// # Arguments
/// * `cache` - Shared page cache
/// * `interval` - Time between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(cache: Arc<RwLock<PageCache>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting page cache cleanup task with interval of {:?}",
            interval
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Page cleanup: removed {} stale pages", removed);
            } else {
                debug!("Page cleanup: no stale pages found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{ManualClock, PageKey};
    use crate::models::PageResult;

    const TTL: Duration = Duration::from_secs(300);

    fn shared_cache(clock: &ManualClock) -> Arc<RwLock<PageCache>> {
        Arc::new(RwLock::new(
            PageCache::new(100, TTL).with_clock(Arc::new(clock.clone())),
        ))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_stale_pages() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);
        cache
            .write()
            .await
            .insert(PageKey::new(1, 12), PageResult::default());

        clock.advance(TTL);
        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(cache.read().await.is_empty(), "Stale page should have been cleaned up");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_fresh_pages() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);
        cache
            .write()
            .await
            .insert(PageKey::new(1, 12), PageResult::default());

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(cache.read().await.len(), 1, "Fresh page should not be removed");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = shared_cache(&ManualClock::new(0));

        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
