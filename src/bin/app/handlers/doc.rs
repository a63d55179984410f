// src/bin/app/handlers/doc.rs

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::types::AppState;

/// Serve an uploaded document's bytes back to the viewer for rendering.
pub async fn get_doc(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(id) = params.get("id") else {
        return (StatusCode::BAD_REQUEST, "Missing id").into_response();
    };

    match state.doc_bytes.read().await.get(id).cloned() {
        Some(bytes) => ([(header::CONTENT_TYPE, "application/pdf")], bytes).into_response(),
        None => (StatusCode::NOT_FOUND, "Unknown document id").into_response(),
    }
}
