//! In-Memory Storage Adapter
//!
//! HashMap-backed storage with per-entry expiry, usable without an external
//! service and as the default test backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{epoch_ms, CachedResponse, StoredEntry};
use crate::error::{CacheError, Result};
use crate::storage::StorageAdapter;

/// A stored entry plus the absolute instant at which it expires.
#[derive(Debug, Clone)]
struct MemoryEntry {
    entry: StoredEntry,
    /// Expiration timestamp (Unix milliseconds)
    expires_at: u64,
}

impl MemoryEntry {
    /// An entry is expired once the current time reaches its expiry instant.
    fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

// == Memory Adapter ==
/// In-memory storage backend with TTL expiry.
///
/// Expired entries are dropped lazily on `get`; the background sweep
/// (`tasks::spawn_cleanup_task`) reclaims entries that are never read
/// again.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    entries: RwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryAdapter {
    // == Constructor ==
    /// Creates an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let now = epoch_ms();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    // == Length ==
    /// Current number of stored entries, expired stragglers included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the adapter holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl StorageAdapter for MemoryAdapter {
    async fn get(&self, key: &str) -> Result<StoredEntry> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired(epoch_ms()) => return Ok(entry.entry.clone()),
                Some(_) => {}
                None => return Err(CacheError::NotFound(key.to_string())),
            }
        }

        // Expired: drop the straggler under the write lock.
        self.entries.write().await.remove(key);
        Err(CacheError::Expired(key.to_string()))
    }

    async fn set(&self, key: &str, response: CachedResponse, duration: u64) -> Result<()> {
        let expires_at = epoch_ms().saturating_add(duration.saturating_mul(1000));
        let entry = MemoryEntry {
            entry: StoredEntry { duration, response },
            expires_at,
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }
}
