//! Axum Middleware
//!
//! Wires the cache engine into an axum router as request middleware via
//! `axum::middleware::from_fn_with_state`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{
        header::{HeaderName, CACHE_CONTROL},
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::cache::{CachedPayload, CacheEngine, RequestContext, ResponseStatus, ServeDecision};

/// Request middleware around the cache engine.
///
/// Runs the pre-handler lookup, short-circuiting on cache hits and validator
/// matches. On pass-through the downstream response body is buffered so the
/// post-handler store step can snapshot it, and the engine's header patch is
/// merged before the response leaves.
pub async fn cache_middleware(
    State(engine): State<Arc<CacheEngine>>,
    request: Request,
    next: Next,
) -> Response {
    let ctx = RequestContext::from_request(&request);

    match engine.on_request(&ctx).await {
        ServeDecision::ServeCached(payload) => cached_response(payload),
        ServeDecision::NotModified(headers) => not_modified_response(headers),
        ServeDecision::PassThrough(patch) => {
            let response = next.run(request).await;
            let (mut parts, body) = response.into_parts();

            let bytes = match to_bytes(body, usize::MAX).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    error!("failed to buffer response body: {err}");
                    let mut failed = Response::new(Body::empty());
                    *failed.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    return failed;
                }
            };

            // Queued at lookup time; superseded once eligibility is known.
            set_cache_control(&mut parts.headers, &patch.cache_control);

            let headers: Vec<(String, String)> = parts
                .headers
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.to_string(), value.to_string()))
                })
                .collect();

            let patch = engine.on_response(
                &ctx,
                Some(ResponseStatus::Code(parts.status.as_u16())),
                headers,
                bytes.to_vec(),
            );
            set_cache_control(&mut parts.headers, &patch.cache_control);

            Response::from_parts(parts, Body::from(bytes))
        }
    }
}

/// Builds a full response from a cached payload.
fn cached_response(payload: CachedPayload) -> Response {
    let mut response = Response::new(Body::from(payload.data));
    *response.status_mut() = StatusCode::from_u16(payload.status).unwrap_or(StatusCode::OK);
    append_headers(response.headers_mut(), &payload.headers);
    response
}

/// Builds a bodyless 304 carrying the cached headers verbatim.
fn not_modified_response(headers: Vec<(String, String)>) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NOT_MODIFIED;
    append_headers(response.headers_mut(), &headers);
    response
}

/// Appends stored header pairs, skipping names or values that are not valid
/// HTTP header material.
fn append_headers(target: &mut HeaderMap, headers: &[(String, String)]) {
    for (name, value) in headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            target.append(name, value);
        }
    }
}

fn set_cache_control(headers: &mut HeaderMap, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(CACHE_CONTROL, value);
    }
}
