// src/bin/app/handlers/ready.rs

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::types::AppState;

/// Whether the given upload's index is the one currently installed. The
/// frontend polls this after /upload before enabling the search box.
pub async fn is_ready(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(id) = params.get("id") {
        let ready = state.ready_doc.read().await.as_deref() == Some(id.as_str());
        Json(json!({ "ready": ready })).into_response()
    } else {
        (StatusCode::BAD_REQUEST, "Missing id").into_response()
    }
}
