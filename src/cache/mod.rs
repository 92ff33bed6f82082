//! Cache Module
//!
//! The caching decision core: key derivation, stored entry types,
//! eligibility filtering, freshness arithmetic, conditional request
//! resolution, and the engine that orchestrates them around the request
//! lifecycle.

mod conditional;
mod eligibility;
mod engine;
mod entry;
mod freshness;
mod key;
mod status;


// Re-export public types and operations
pub use conditional::not_modified;
pub use eligibility::is_cacheable;
pub use engine::{
    CachedPayload, CacheEngine, RequestContext, ResponsePatch, ServeDecision,
    CACHE_CONTROL_BYPASS,
};
pub use entry::{epoch_ms, CachedResponse, StoredEntry};
pub use freshness::{expires_at_ms, remaining_ttl};
pub use key::derive_key;
pub use status::{code_from_name, effective_status, ResponseStatus};
