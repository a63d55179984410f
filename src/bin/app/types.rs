// src/bin/app/types.rs

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use wellfind::{ListingEvent, SearchEngine, SearchHit};

// --- Type aliases for shared state maps ---
pub type DocBytesMap = Arc<RwLock<HashMap<String, Vec<u8>>>>;

// --- App state shared across handlers ---
//
// One viewer per process: a single engine holds the active document's index
// and query session, replaced wholesale on every upload. Raw bytes are kept
// per upload id so the frontend can render pages.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<SearchEngine>>,
    pub listing: Arc<RwLock<Vec<ListingItem>>>,
    pub doc_bytes: DocBytesMap,
    /// Upload id whose index is currently installed; None while a build is
    /// still running.
    pub ready_doc: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            engine: Arc::new(Mutex::new(SearchEngine::new())),
            listing: Arc::new(RwLock::new(Vec::new())),
            doc_bytes: Arc::new(RwLock::new(HashMap::new())),
            ready_doc: Arc::new(RwLock::new(None)),
        }
    }
}

// --- Request types ---
#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

// --- Response types ---
#[derive(Serialize)]
pub struct UploadResponse {
    pub id: String,
}

#[derive(Serialize, Clone)]
pub struct ListingItem {
    pub label: String,
    pub value: usize,
    pub page: usize,
}

impl From<ListingEvent> for ListingItem {
    fn from(event: ListingEvent) -> Self {
        ListingItem {
            label: event.label,
            value: event.value,
            page: event.page_number,
        }
    }
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "matchIndex", skip_serializing_if = "Option::is_none")]
    pub match_index: Option<usize>,
    #[serde(rename = "matchCount", skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
}

impl SearchResponse {
    pub fn hit(hit: &SearchHit) -> Self {
        SearchResponse {
            found: true,
            page: Some(hit.page_number),
            name: Some(hit.entry.name_raw.clone()),
            match_index: Some(hit.match_index),
            match_count: Some(hit.match_count),
        }
    }

    pub fn no_match() -> Self {
        SearchResponse {
            found: false,
            page: None,
            name: None,
            match_index: None,
            match_count: None,
        }
    }
}
