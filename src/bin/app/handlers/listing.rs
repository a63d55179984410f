// src/bin/app/handlers/listing.rs

use axum::{Json, extract::State};

use crate::types::{AppState, ListingItem};

/// Listing items for the active document, one per indexed record, in index
/// order. Populates the viewer's page-jump select widget.
pub async fn get_listing(State(state): State<AppState>) -> Json<Vec<ListingItem>> {
    Json(state.listing.read().await.clone())
}
