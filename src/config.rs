//! Configuration Module
//!
//! Eligibility rules and duration settings supplied once at engine
//! construction.

use std::collections::HashSet;
use std::env;

/// Fallback duration in seconds for freshly stored entries.
pub const DEFAULT_DURATION_SECS: u64 = 60;

// == Status Code Rules ==
/// Include/exclude rules over HTTP status codes.
///
/// An exclude list takes precedence over an include list when both are
/// configured; with neither configured, every status is cacheable.
#[derive(Debug, Clone, Default)]
pub struct StatusCodeRules {
    /// Only these status codes may be cached, when set
    pub include: Option<HashSet<u16>>,
    /// These status codes are never cached, when set
    pub exclude: Option<HashSet<u16>>,
}

// == Header Rules ==
/// Include/exclude rules over response header names.
///
/// Accepted for configuration parity but not consulted by the eligibility
/// decision; kept as an extension point.
#[derive(Debug, Clone, Default)]
pub struct HeaderRules {
    /// Header names allowed to influence caching, when set
    pub include: Option<HashSet<String>>,
    /// Header names barred from influencing caching, when set
    pub exclude: Option<HashSet<String>>,
}

// == Cache Config ==
/// Cache engine configuration.
///
/// Immutable for the process lifetime once the engine is constructed.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Status-code eligibility rules
    pub status_codes: StatusCodeRules,
    /// Header-name rules (declared, currently unwired)
    pub headers: HeaderRules,
    /// Seconds a freshly stored entry is intended to live
    pub default_duration: u64,
}

impl CacheConfig {
    /// Creates a config with the default duration and no eligibility rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_DURATION` - entry lifetime in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            default_duration: env::var("CACHE_DEFAULT_DURATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DURATION_SECS),
            ..Self::default()
        }
    }

    /// Restricts caching to the given status codes.
    pub fn include_status(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.status_codes.include = Some(codes.into_iter().collect());
        self
    }

    /// Bars the given status codes from caching.
    pub fn exclude_status(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.status_codes.exclude = Some(codes.into_iter().collect());
        self
    }

    /// Overrides the entry lifetime in seconds.
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.default_duration = seconds;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            status_codes: StatusCodeRules::default(),
            headers: HeaderRules::default(),
            default_duration: DEFAULT_DURATION_SECS,
        }
    }
}
