//! Cache Key Derivation
//!
//! Maps an inbound request to a stable cache key.

use axum::http::Uri;

/// Derives the cache key for a request URL.
///
/// The key is the request path, plus `?` and the raw query string when one
/// is present. Method and headers are deliberately not part of the key, so
/// two representations of the same URL (different `accept` values, say)
/// share a single entry. No normalization is applied beyond what URI
/// parsing already performs: no case folding, no parameter reordering.
pub fn derive_key(uri: &Uri) -> String {
    match uri.query() {
        Some(query) => format!("{}?{}", uri.path(), query),
        None => uri.path().to_string(),
    }
}
