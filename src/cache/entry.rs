//! Cached Entry Module
//!
//! Stored record types for cached HTTP responses.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// == Cached Response ==
/// A snapshot of an HTTP response as written to the storage backend.
///
/// Headers keep their original order; lookups by name are
/// ASCII-case-insensitive. The body is kept in its serialized form and never
/// inspected structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    /// HTTP status code of the cached response
    pub status: u16,
    /// Response headers in original order
    pub headers: Vec<(String, String)>,
    /// Serialized response body, stored opaquely
    pub data: Vec<u8>,
    /// Write timestamp (Unix milliseconds)
    pub timestamp: u64,
}

impl CachedResponse {
    // == Constructor ==
    /// Creates a new snapshot stamped with the current time.
    pub fn new(status: u16, headers: Vec<(String, String)>, data: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            data,
            timestamp: epoch_ms(),
        }
    }

    // == Header Lookup ==
    /// Returns the value of the first header matching `name`,
    /// ASCII-case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    // == Header Replacement ==
    /// Sets a header value, replacing an existing header of the same name
    /// in place so its position in the list is preserved.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }
}

// == Stored Entry ==
/// What the storage backend yields on a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Seconds the entry was intended to live.
    ///
    /// Must equal the expiry the backend applied when the entry was written,
    /// so remaining-TTL arithmetic never diverges from the backend's own
    /// expiry clock by more than clock skew.
    pub duration: u64,
    /// The cached response payload
    pub response: CachedResponse,
}

// == Utility Functions ==
/// Returns the current Unix timestamp in milliseconds.
pub fn epoch_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CachedResponse {
        CachedResponse::new(
            200,
            vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("etag".to_string(), "\"abc\"".to_string()),
            ],
            br#"{"hello":"World"}"#.to_vec(),
        )
    }

    #[test]
    fn test_new_stamps_current_time() {
        let before = epoch_ms();
        let response = sample();
        let after = epoch_ms();

        assert!(response.timestamp >= before);
        assert!(response.timestamp <= after);
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let response = sample();

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("ETAG"), Some("\"abc\""));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_set_header_replaces_in_place() {
        let mut response = sample();
        response.set_header("Content-Type", "text/plain");

        assert_eq!(response.header("content-type"), Some("text/plain"));
        // Position and count unchanged
        assert_eq!(response.headers.len(), 2);
        assert_eq!(response.headers[0].0, "content-type");
    }

    #[test]
    fn test_set_header_appends_when_absent() {
        let mut response = sample();
        response.set_header("cache-control", "max-age=60");

        assert_eq!(response.headers.len(), 3);
        assert_eq!(response.header("cache-control"), Some("max-age=60"));
    }

    #[test]
    fn test_entry_serde_roundtrip() {
        let entry = StoredEntry {
            duration: 60,
            response: sample(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let decoded: StoredEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, entry);
    }
}
