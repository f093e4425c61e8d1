//! Best-effort response cache stage.
//!
//! Keyed by method plus full request URI, so distinct query strings cache
//! independently. Entries carry a 30-day advisory freshness window; the
//! store is bounded and may drop entries at any time, so nothing may
//! depend on an entry surviving the window.

use std::{
    collections::HashMap,
    sync::RwLock,
    time::{Duration, Instant},
};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        HeaderName, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::debug;

use crate::{error::GatewayError, routes::AppState};

/// Freshness window advertised to clients and applied to stored entries.
pub const FRESHNESS: Duration = Duration::from_secs(60 * 60 * 24 * 30);

/// `Cache-Control` value attached to every response passing the stage.
const CACHE_CONTROL_VALUE: HeaderValue = HeaderValue::from_static("max-age=2592000");

/// Marker header present on responses served from the cache.
pub const CACHE_STATUS_HEADER: HeaderName = HeaderName::from_static("placard-cache-status");
const CACHE_STATUS_HIT: HeaderValue = HeaderValue::from_static("HIT");

/// Upper bound on stored entries.
const MAX_ENTRIES: usize = 1024;

/// Largest body the stage will buffer and store.
const MAX_BODY_BYTES: usize = 64 * 1024;

// ── Store ─────────────────────────────────────────────────────────────────────

/// A response captured for replay: status, content type, and body.
#[derive(Debug, Clone)]
pub struct StoredResponse {
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: Bytes,
    stored_at: Instant,
}

impl StoredResponse {
    fn new(status: StatusCode, content_type: Option<HeaderValue>, body: Bytes) -> Self {
        Self {
            status,
            content_type,
            body,
            stored_at: Instant::now(),
        }
    }

    fn is_fresh(&self) -> bool {
        self.stored_at.elapsed() < FRESHNESS
    }
}

impl IntoResponse for StoredResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        response.headers_mut().insert(CACHE_CONTROL, CACHE_CONTROL_VALUE);
        response.headers_mut().insert(CACHE_STATUS_HEADER, CACHE_STATUS_HIT);
        response
    }
}

/// Thread-safe, bounded, URL-keyed response store.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, StoredResponse>>,
}

impl ResponseCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a fresh entry. Stale entries are dropped on access.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread
    /// panicked while holding the lock).
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<StoredResponse> {
        let stale = {
            #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
            let entries = self
                .entries
                .read()
                .expect("response cache read lock poisoned");
            match entries.get(key) {
                Some(stored) if stored.is_fresh() => return Some(stored.clone()),
                Some(_) => true,
                None => false,
            }
        };
        if stale {
            #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
            self.entries
                .write()
                .expect("response cache write lock poisoned")
                .remove(key);
        }
        None
    }

    /// Store an entry, evicting an arbitrary one if the cache is full.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn store(&self, key: String, response: StoredResponse) {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut entries = self
            .entries
            .write()
            .expect("response cache write lock poisoned");
        if entries.len() >= MAX_ENTRIES && !entries.contains_key(&key) {
            if let Some(evicted) = entries.keys().next().cloned() {
                entries.remove(&evicted);
            }
        }
        entries.insert(key, response);
    }

    /// Number of stored entries (stale ones included until next access).
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.entries
            .read()
            .expect("response cache read lock poisoned")
            .len()
    }

    /// Returns `true` if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Stage ─────────────────────────────────────────────────────────────────────

/// Serve `/v1` responses from the cache, populating it on miss.
///
/// Runs after authorization. On a hit the stored response is replayed
/// verbatim (plus the HIT marker header) and the handler never runs. On a
/// miss the handler's response is buffered, stamped with the freshness
/// directive, stored, and returned.
pub async fn cache_responses(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cache_key = format!("{} {}", request.method(), request.uri());
    if let Some(stored) = state.cache.lookup(&cache_key) {
        debug!(key = %cache_key, "cache hit");
        return stored.into_response();
    }
    debug!(key = %cache_key, "cache miss");

    let response = next.run(request).await;
    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(key = %cache_key, error = %e, "response body exceeded cache buffer");
            return GatewayError::Internal.into_response();
        }
    };

    parts.headers.insert(CACHE_CONTROL, CACHE_CONTROL_VALUE);
    let content_type = parts.headers.get(CONTENT_TYPE).cloned();
    state.cache.store(
        cache_key,
        StoredResponse::new(parts.status, content_type, bytes.clone()),
    );
    Response::from_parts(parts, Body::from(bytes))
}
