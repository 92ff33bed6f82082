//! Freshness Calculation
//!
//! Remaining time-to-live arithmetic for stored entries.

use crate::cache::StoredEntry;

/// Computes the remaining TTL in whole seconds for a stored entry.
///
/// Implements `floor(duration - (now - timestamp) / 1000)`, clamped at zero.
/// The result becomes the `max-age` directive when a hit is served.
///
/// An entry the backend still holds past its logical duration (expiry
/// granularity, clock skew) reports 0 and is served stale rather than
/// treated as a miss; the backend's own expiry, not this arithmetic, decides
/// whether the entry exists at all.
pub fn remaining_ttl(entry: &StoredEntry, now_ms: u64) -> u64 {
    let elapsed_ms = now_ms.saturating_sub(entry.response.timestamp);
    entry.duration.saturating_sub(elapsed_ms.div_ceil(1000))
}

/// Returns the instant (Unix milliseconds) at which the entry becomes stale.
pub fn expires_at_ms(entry: &StoredEntry) -> u64 {
    entry
        .response
        .timestamp
        .saturating_add(entry.duration.saturating_mul(1000))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachedResponse;

    fn entry_at(timestamp: u64, duration: u64) -> StoredEntry {
        StoredEntry {
            duration,
            response: CachedResponse {
                status: 200,
                headers: Vec::new(),
                data: Vec::new(),
                timestamp,
            },
        }
    }

    #[test]
    fn test_full_ttl_at_write_instant() {
        let entry = entry_at(1_000_000, 60);
        assert_eq!(remaining_ttl(&entry, 1_000_000), 60);
    }

    #[test]
    fn test_partial_seconds_floor_downward() {
        let entry = entry_at(1_000_000, 60);
        // 500ms elapsed: 60 - 0.5 floors to 59
        assert_eq!(remaining_ttl(&entry, 1_000_500), 59);
        // Exactly one second elapsed
        assert_eq!(remaining_ttl(&entry, 1_001_000), 59);
        // Just past one second
        assert_eq!(remaining_ttl(&entry, 1_001_001), 58);
    }

    #[test]
    fn test_clamped_at_zero_past_duration() {
        let entry = entry_at(1_000_000, 60);
        assert_eq!(remaining_ttl(&entry, 1_060_000), 0);
        assert_eq!(remaining_ttl(&entry, 2_000_000), 0);
    }

    #[test]
    fn test_clock_skew_never_exceeds_duration() {
        let entry = entry_at(1_000_000, 60);
        // now before the write timestamp: elapsed clamps to zero
        assert_eq!(remaining_ttl(&entry, 999_000), 60);
    }

    #[test]
    fn test_zero_duration_entry() {
        let entry = entry_at(1_000_000, 0);
        assert_eq!(remaining_ttl(&entry, 1_000_000), 0);
        assert_eq!(remaining_ttl(&entry, 1_000_001), 0);
    }

    #[test]
    fn test_expires_at() {
        let entry = entry_at(1_000_000, 60);
        assert_eq!(expires_at_ms(&entry), 1_060_000);
    }
}
