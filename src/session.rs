use crate::index::{Entry, ListingEvent, build_index};
use crate::score::{QueryKeys, rank_entries};

/// Resolution of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NoMatch,
    Hit(SearchHit),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub page_number: usize,
    pub entry: Entry,
    /// Position in the current match list, 0-indexed; with `match_count` it
    /// lets the caller render "match X of Y".
    pub match_index: usize,
    pub match_count: usize,
}

/// Handed out by [`SearchEngine::begin_load`]; only the token from the most
/// recent `begin_load` may install an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Owned search state for the currently loaded document: the entry index plus
/// the cycling query session.
///
/// One engine per viewer. Loading a document replaces everything wholesale;
/// the generation counter makes a late-finishing build for a previous
/// document harmless even when page extraction runs asynchronously.
#[derive(Debug, Default)]
pub struct SearchEngine {
    entries: Vec<Entry>,
    generation: u64,
    last_query_signature: Option<String>,
    last_matches: Vec<Entry>,
    last_match_index: usize,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start loading a new document. The previous index and session are gone
    /// immediately, so a search racing the build sees an empty index rather
    /// than stale results.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        self.entries.clear();
        self.reset_session();
        LoadToken(self.generation)
    }

    /// Build and install the index for the load identified by `token`.
    ///
    /// Returns `None`, touching nothing, when a newer `begin_load` has
    /// happened since the token was issued.
    pub fn finish_load(
        &mut self,
        token: LoadToken,
        pages_text: &[String],
    ) -> Option<Vec<ListingEvent>> {
        if token.0 != self.generation {
            return None;
        }
        let (entries, events) = build_index(pages_text);
        self.entries = entries;
        self.reset_session();
        Some(events)
    }

    /// Synchronous load: begin and finish in one step.
    pub fn load(&mut self, pages_text: &[String]) -> Vec<ListingEvent> {
        let token = self.begin_load();
        self.finish_load(token, pages_text).unwrap_or_default()
    }

    /// Resolve a query to its best-matching page.
    ///
    /// A query whose normalized form differs from the previous one is ranked
    /// fresh; resubmitting the identical normalized query advances through
    /// the existing match list and wraps around. An empty index or blank
    /// query leaves all state untouched.
    pub fn search(&mut self, raw_query: &str) -> SearchOutcome {
        if self.entries.is_empty() || raw_query.trim().is_empty() {
            return SearchOutcome::NoMatch;
        }

        let query = QueryKeys::derive(raw_query);
        let repeat = self.last_query_signature.as_deref() == Some(query.signature.as_str());

        if repeat {
            if !self.last_matches.is_empty() {
                self.last_match_index = (self.last_match_index + 1) % self.last_matches.len();
            }
        } else {
            self.last_matches = rank_entries(&self.entries, &query);
            self.last_match_index = 0;
            self.last_query_signature = Some(query.signature);
        }

        if self.last_matches.is_empty() {
            return SearchOutcome::NoMatch;
        }

        let entry = self.last_matches[self.last_match_index].clone();
        SearchOutcome::Hit(SearchHit {
            page_number: entry.page_number,
            match_index: self.last_match_index,
            match_count: self.last_matches.len(),
            entry,
        })
    }

    fn reset_session(&mut self) {
        self.last_query_signature = None;
        self.last_matches.clear();
        self.last_match_index = 0;
    }
}
