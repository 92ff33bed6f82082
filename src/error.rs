//! Error types for the response cache
//!
//! Provides unified error handling using thiserror.
//!
//! None of these errors ever reach an HTTP client: the decision engine treats
//! every lookup failure as a cache miss and every store failure as a logged
//! no-op, degrading to plain pass-through at worst.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache and storage operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in the storage backend
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key was present but past its expiry
    #[error("Key expired: {0}")]
    Expired(String),

    /// Stored entry could not be decoded
    #[error("Malformed entry for key '{0}': {1}")]
    Malformed(String, String),

    /// Storage backend failure (connection, I/O, serialization, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
