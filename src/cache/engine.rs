//! Cache Decision Engine
//!
//! Orchestrates key derivation, storage lookups, conditional requests,
//! freshness arithmetic and eligibility filtering around the two decision
//! points of the request lifecycle: the pre-handler lookup and the
//! post-handler store.

use std::sync::Arc;

use axum::http::{Request, Uri};
use tracing::{debug, info, warn};

use crate::cache::entry::{epoch_ms, CachedResponse};
use crate::cache::status::{effective_status, ResponseStatus};
use crate::cache::{conditional, eligibility, freshness, key};
use crate::config::CacheConfig;
use crate::storage::StorageAdapter;

/// `cache-control` value marking a response that was not served from cache
/// and may not be reused by downstream caches.
pub const CACHE_CONTROL_BYPASS: &str = "no-cache, no-store, must-revalidate";

// == Request Context ==
/// The request attributes the engine consumes, captured before the request
/// is handed to the backend handler.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request URI; the cache key derives from its path and query
    pub uri: Uri,
    /// Value of the request `cache-control` header, if any
    pub cache_control: Option<String>,
    /// Value of the request `if-none-match` header, if any
    pub if_none_match: Option<String>,
}

impl RequestContext {
    /// Creates a context for a URI with no conditional or cache-control
    /// request headers.
    pub fn new(uri: Uri) -> Self {
        Self {
            uri,
            cache_control: None,
            if_none_match: None,
        }
    }

    /// Captures the relevant attributes of an HTTP request.
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        Self {
            uri: request.uri().clone(),
            cache_control: header("cache-control"),
            if_none_match: header("if-none-match"),
        }
    }
}

// == Decision Types ==
/// Headers the caller must merge into the outgoing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePatch {
    /// Replacement `cache-control` value
    pub cache_control: String,
}

impl ResponsePatch {
    fn bypass() -> Self {
        Self {
            cache_control: CACHE_CONTROL_BYPASS.to_string(),
        }
    }
}

/// A cached response ready to serve, `cache-control` already rewritten to
/// the remaining freshness window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedPayload {
    /// Status code of the stored response
    pub status: u16,
    /// Stored headers, in original order
    pub headers: Vec<(String, String)>,
    /// Stored body bytes
    pub data: Vec<u8>,
}

/// Outcome of the pre-handler lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeDecision {
    /// No usable entry: forward the request to the backend handler. Carries
    /// the `cache-control` value queued for the eventual response, which the
    /// post-handler step supersedes once eligibility is known.
    PassThrough(ResponsePatch),
    /// Terminal: serve the cached payload without invoking the handler.
    ServeCached(CachedPayload),
    /// Terminal: the request validator matches the stored ETag. The caller
    /// emits a bodyless 304 carrying these cached headers untouched.
    NotModified(Vec<(String, String)>),
}

// == Cache Engine ==
/// The caching decision engine.
///
/// Holds no mutable state of its own; the injected storage adapter is the
/// only shared resource, so one engine instance is safely shared across
/// concurrent requests.
pub struct CacheEngine {
    adapter: Arc<dyn StorageAdapter>,
    config: CacheConfig,
}

impl CacheEngine {
    // == Constructor ==
    /// Creates an engine around an injected storage adapter.
    pub fn new(adapter: Arc<dyn StorageAdapter>, config: CacheConfig) -> Self {
        Self { adapter, config }
    }

    /// Read access to the engine configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Pre-Handler Lookup ==
    /// Decides how to serve an incoming request.
    ///
    /// Lookup failures of any kind (missing key, expired entry, backend
    /// error, malformed data) are treated as misses and never surface to
    /// the caller. `ServeCached` and `NotModified` are terminal: the backend
    /// handler must not run for them.
    pub async fn on_request(&self, ctx: &RequestContext) -> ServeDecision {
        if has_no_cache_directive(ctx.cache_control.as_deref()) {
            debug!("request opted out of caching, bypassing lookup");
            return ServeDecision::PassThrough(ResponsePatch::bypass());
        }

        let key = key::derive_key(&ctx.uri);
        let entry = match self.adapter.get(&key).await {
            Ok(entry) => entry,
            Err(err) => {
                debug!(%key, "cache miss: {err}");
                return ServeDecision::PassThrough(ResponsePatch::bypass());
            }
        };

        // The conditional short-circuit comes before any header rewriting.
        if conditional::not_modified(ctx.if_none_match.as_deref(), entry.response.header("etag")) {
            info!(%key, "validator match, responding 304");
            return ServeDecision::NotModified(entry.response.headers);
        }

        let remaining = freshness::remaining_ttl(&entry, epoch_ms());
        info!(%key, remaining, "serving cached response");

        let mut response = entry.response;
        response.set_header("cache-control", format!("max-age={remaining}"));

        ServeDecision::ServeCached(CachedPayload {
            status: response.status,
            headers: response.headers,
            data: response.data,
        })
    }

    // == Post-Handler Store ==
    /// Decides whether a freshly produced response should be persisted and
    /// returns the headers to merge into it.
    ///
    /// Only reached when the lookup step returned `PassThrough`. The storage
    /// write happens on a spawned task, fire-and-forget: its outcome never
    /// alters the response already on its way to the caller, and failures
    /// are only logged.
    pub fn on_response(
        &self,
        ctx: &RequestContext,
        status: Option<ResponseStatus>,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> ResponsePatch {
        let key = key::derive_key(&ctx.uri);
        let status = effective_status(status.as_ref());

        if !eligibility::is_cacheable(status, &self.config.status_codes) {
            debug!(%key, status, "response not eligible for caching");
            return ResponsePatch::bypass();
        }

        let duration = self.config.default_duration;
        let cache_control = format!("max-age={duration}");

        let mut response = CachedResponse::new(status, headers, body);
        response.set_header("cache-control", cache_control.clone());

        let adapter = Arc::clone(&self.adapter);
        tokio::spawn(async move {
            match adapter.set(&key, response, duration).await {
                Ok(()) => info!(%key, duration, "response cached"),
                Err(err) => warn!(%key, "response could not be cached: {err}"),
            }
        });

        ResponsePatch { cache_control }
    }
}

/// Returns whether a request `cache-control` value carries a `no-cache`
/// directive.
fn has_no_cache_directive(value: Option<&str>) -> bool {
    value.is_some_and(|value| {
        value
            .split(',')
            .any(|directive| directive.trim().eq_ignore_ascii_case("no-cache"))
    })
}
