//! Text indexing and fuzzy-match search for multi-page well/unit gas volume
//! statement documents.
//!
//! Per-page extracted text goes in, an ordered index of `Name:`-prefixed
//! records comes out, and free-text queries resolve to the best-matching
//! page, cycling through the match list when the same query is resubmitted.

pub mod extract;
pub mod index;
pub mod keys;
pub mod normalize;
pub mod score;
pub mod session;

pub use index::{Entry, ListingEvent, build_index};
pub use session::{LoadToken, SearchEngine, SearchHit, SearchOutcome};
