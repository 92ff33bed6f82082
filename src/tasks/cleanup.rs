//! Expiry Sweep Task
//!
//! Background task that periodically removes expired entries from the
//! in-memory storage backend, so memory is reclaimed even for keys that are
//! never looked up again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::storage::MemoryAdapter;

/// Spawns a background task that periodically sweeps expired entries.
///
/// # Arguments
/// * `adapter` - shared reference to the in-memory backend
/// * `interval_secs` - seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(adapter: Arc<MemoryAdapter>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {interval_secs} seconds");

        loop {
            tokio::time::sleep(interval).await;

            let removed = adapter.cleanup_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {removed} stale entries");
            } else {
                debug!("Expiry sweep: nothing to remove");
            }
        }
    })
}
