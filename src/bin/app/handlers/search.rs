// src/bin/app/handlers/search.rs

use axum::{
    Json,
    extract::{Query, State},
};
use wellfind::SearchOutcome;

use crate::types::{AppState, SearchParams, SearchResponse};

/// Resolve a query against the active document.
///
/// Resubmitting the identical query cycles through the match list, so the
/// frontend can render "match X of Y" and step on every Enter press. The
/// caller owns scrolling/highlighting the returned page.
pub async fn run_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let outcome = state.engine.lock().await.search(&params.q);
    match outcome {
        SearchOutcome::Hit(hit) => {
            tracing::debug!(
                query = %params.q,
                page = hit.page_number,
                match_index = hit.match_index,
                "search hit"
            );
            Json(SearchResponse::hit(&hit))
        }
        SearchOutcome::NoMatch => Json(SearchResponse::no_match()),
    }
}
