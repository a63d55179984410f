// src/bin/app/handlers/upload.rs

use std::time::Instant;

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use wellfind::extract::extract_pages;

use crate::errors::AppError;
use crate::types::{AppState, ListingItem, UploadResponse};

/// Accept a statement PDF, hand back an id immediately, and index it in the
/// background.
///
/// Uploading again while a build is still extracting starts a newer load;
/// the engine's load token makes the stale build's result land in the trash
/// instead of on top of the newer document.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("pdf") {
            continue;
        }

        let filename = field
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("missing filename"))?
            .to_string();
        let data = field.bytes().await?;
        tracing::info!(file = %filename, bytes = data.len(), "received upload");

        let id = Uuid::new_v4().to_string();

        {
            let mut map = state.doc_bytes.write().await;
            map.insert(id.clone(), data.to_vec());
        }
        *state.ready_doc.write().await = None;
        state.listing.write().await.clear();

        // Claim the load before spawning so any later upload outranks us.
        let token = state.engine.lock().await.begin_load();

        let state_clone = state.clone();
        let id_clone = id.clone();
        tokio::spawn(async move {
            let start = Instant::now();
            let pages = match tokio::task::spawn_blocking(move || extract_pages(&data)).await {
                Ok(Ok(pages)) => pages,
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "extraction failed");
                    return;
                }
                Err(e) => {
                    tracing::error!(error = %e, "extraction task panicked");
                    return;
                }
            };

            let mut engine = state_clone.engine.lock().await;
            match engine.finish_load(token, &pages) {
                Some(events) => {
                    tracing::info!(
                        entries = engine.entries().len(),
                        elapsed = ?start.elapsed(),
                        "index built"
                    );
                    let items: Vec<ListingItem> =
                        events.into_iter().map(ListingItem::from).collect();
                    drop(engine);
                    *state_clone.listing.write().await = items;
                    *state_clone.ready_doc.write().await = Some(id_clone);
                }
                None => tracing::warn!("discarding stale index build"),
            }
        });

        return Ok((StatusCode::OK, Json(UploadResponse { id })));
    }

    Err(AppError::from(anyhow::anyhow!(
        "no pdf field in multipart body"
    )))
}
