//! API-key authorization stage.
//!
//! Outermost stage on every `/v1` route: it runs before the cache stage
//! and short-circuits with 401 before any downstream work when the `key`
//! query parameter is missing or unknown.

use std::collections::HashMap;

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{error::GatewayError, routes::AppState};

/// Query parameter carrying the API key.
pub const KEY_PARAM: &str = "key";

/// Permit the request only if its `key` query parameter is in the
/// configured allow-list.
pub async fn require_api_key(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Response {
    let key = params.get(KEY_PARAM).map_or("", String::as_str);
    if !state.api_keys.authorizes(key) {
        debug!(path = %request.uri().path(), "rejected request with missing or unknown key");
        return GatewayError::InvalidApiKey.into_response();
    }
    next.run(request).await
}
