//! Axum route handlers and router assembly for the Placard gateway.

use std::sync::Arc;

use axum::{
    extract::Query,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use placard_core::{ApiKeySet, Manifest, ManifestQuery};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    auth,
    cache::{self, ResponseCache},
    config::GatewayConfig,
    error::GatewayError,
};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Immutable per-process state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Parsed API-key allow-list.
    pub api_keys: Arc<ApiKeySet>,
    /// Best-effort response store.
    pub cache: Arc<ResponseCache>,
}

impl AppState {
    /// Build state from resolved configuration.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            api_keys: Arc::new(config.api_keys.clone()),
            cache: Arc::new(ResponseCache::new()),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// Stage order on every `/v1` route, outermost first: authorization, then
/// the response cache, then the handler. Authorization always runs; the
/// cache short-circuits handler work on a hit.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/status", get(status))
        .route("/v1/webmanif", get(webmanif))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            cache::cache_responses,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /v1/status` — liveness probe.
pub async fn status() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /v1/webmanif` — project the query parameters into a manifest
/// document.
///
/// # Errors
/// Returns [`GatewayError::Validation`] if `name` is missing or empty.
pub async fn webmanif(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, GatewayError> {
    let query = ManifestQuery::from_pairs(&pairs)?;
    Ok((StatusCode::OK, Json(Manifest::from_query(&query))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let api_keys = match ApiKeySet::parse("valid-key") {
            Ok(k) => k,
            Err(e) => panic!("failed to parse allow-list: {e}"),
        };
        AppState {
            api_keys: Arc::new(api_keys),
            cache: Arc::new(ResponseCache::new()),
        }
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(test_state());
        let req = match Request::builder().uri(uri).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        (status, body)
    }

    #[tokio::test]
    async fn status_with_valid_key_returns_ok() {
        let (status, body) = get_json("/v1/status?key=valid-key").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn missing_key_is_rejected_with_fixed_body() {
        let (status, body) = get_json("/v1/status").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({"error": "Invalid API key"}));
    }

    #[tokio::test]
    async fn unknown_key_is_rejected_on_manifest_route() {
        let (status, body) = get_json("/v1/webmanif?key=wrong&name=MyApp").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({"error": "Invalid API key"}));
    }

    #[tokio::test]
    async fn webmanif_without_name_is_a_validation_error() {
        let (status, body) = get_json("/v1/webmanif?key=valid-key").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fields"][0]["field"], "name");
    }

    #[tokio::test]
    async fn webmanif_minimal_omits_optional_members() {
        let (status, body) = get_json("/v1/webmanif?key=valid-key&name=MyApp").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "MyApp");
        assert_eq!(body["short_name"], "MyApp");
        assert_eq!(body["display"], "standalone");
        let members = match body.as_object() {
            Some(m) => m,
            None => panic!("manifest body must be a JSON object"),
        };
        assert!(!members.contains_key("icons"));
        assert!(!members.contains_key("background_color"));
        assert!(!members.contains_key("theme_color"));
    }

    #[tokio::test]
    async fn webmanif_projects_icon_and_colors() {
        let (status, body) =
            get_json("/v1/webmanif?key=valid-key&name=MyApp&color=%23fff&icon=http://x/icon.png")
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["icons"][0]["src"], "http://x/icon.png");
        assert_eq!(body["icons"][0]["purpose"], "maskable");
        assert_eq!(body["background_color"], "#fff");
        assert_eq!(body["theme_color"], "#fff");
    }
}
