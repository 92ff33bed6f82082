//! Storage Module
//!
//! The pluggable key-value backend consumed by the cache engine.

use async_trait::async_trait;

use crate::cache::{CachedResponse, StoredEntry};
use crate::error::Result;

mod memory;

pub use memory::MemoryAdapter;

// == Storage Adapter ==
/// Contract for storage backends.
///
/// `get` must fail on a missing key or an undecodable entry; the engine
/// treats any failure as "no entry". `set` must apply an expiry of
/// `duration` seconds so stale entries disappear on their own, independent
/// of the engine's freshness arithmetic. The backend owns entry lifetime
/// exclusively: entries vanish through backend expiry or by being
/// overwritten, never through engine-side deletes.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Looks up the entry stored under `key`.
    async fn get(&self, key: &str) -> Result<StoredEntry>;

    /// Stores `response` under `key` with an expiry of `duration` seconds.
    ///
    /// Overwrites any previous entry for the same key; last write wins.
    async fn set(&self, key: &str, response: CachedResponse, duration: u64) -> Result<()>;
}
