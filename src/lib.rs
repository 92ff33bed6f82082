//! recache - HTTP response cache middleware
//!
//! Sits between an incoming request and a backend handler: per request it
//! decides whether a previously stored response can be served instead of
//! re-executing the handler, and whether the fresh response should be stored
//! for reuse. Storage lives behind a pluggable adapter with TTL support.

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod storage;
pub mod tasks;

pub use cache::{CacheEngine, RequestContext, ServeDecision};
pub use config::CacheConfig;
pub use middleware::cache_middleware;
pub use storage::{MemoryAdapter, StorageAdapter};
pub use tasks::spawn_cleanup_task;
