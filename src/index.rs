use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keys::{number_key, tokens_key};

/// One indexed occurrence of a named record at a specific page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-indexed page the record was found on.
    pub page_number: usize,
    /// Display name exactly as it appears in the source text, trimmed.
    pub name_raw: String,
    /// `"A-B"` or `"A"` from the name's first digit runs, if any.
    pub number_key: Option<String>,
    /// Letter-only, number-stripped canonical form of the name.
    pub tokens_key: String,
}

/// Emitted once per created entry so the surrounding UI can populate its
/// selectable page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEvent {
    pub page_number: usize,
    pub label: String,
    pub value: usize,
}

const NAME_MARKER: &str = "Name:";

/// A header rule inspects the text after a `Name:` marker and returns the
/// byte offset to cut at, or `None` to leave the text alone.
///
/// Rules run in `HEADER_RULES` order. The statement template this engine
/// targets repeats boilerplate right after the record name; new templates add
/// a rule here without touching the scan loop.
type HeaderRule = fn(&str) -> Option<usize>;

const HEADER_RULES: &[HeaderRule] = &[cut_statement_header, cut_month_year];

fn cut_statement_header(text: &str) -> Option<usize> {
    text.find("GAS VOLUME STATEMENT")
}

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{4}",
    )
    .expect("month-year pattern is valid")
});

/// Cut before a spelled-out month followed by a 4-digit year, any case.
fn cut_month_year(text: &str) -> Option<usize> {
    MONTH_YEAR.find(text).map(|m| m.start())
}

fn apply_header_rules(mut text: &str) -> &str {
    for rule in HEADER_RULES {
        if let Some(cut) = rule(text) {
            text = &text[..cut];
        }
    }
    text
}

/// Scan per-page text blocks (1-indexed by position) for `Name:` records and
/// build the ordered entry index.
///
/// Markers are found non-overlapping, the cursor advancing just past each one
/// so every record on a page is visited. Duplicate `(page, name)` pairs and
/// names that are empty after header stripping produce nothing. Insertion
/// order is page order, then first-occurrence order within a page.
pub fn build_index(pages_text: &[String]) -> (Vec<Entry>, Vec<ListingEvent>) {
    let mut entries = Vec::new();
    let mut events = Vec::new();
    let mut seen: HashSet<(usize, String)> = HashSet::new();

    for (page_idx, text) in pages_text.iter().enumerate() {
        let page_number = page_idx + 1;
        let mut cursor = 0;

        while let Some(found) = text[cursor..].find(NAME_MARKER) {
            cursor += found + NAME_MARKER.len();

            let name_raw = apply_header_rules(&text[cursor..]).trim();
            if name_raw.is_empty() {
                continue;
            }
            if !seen.insert((page_number, name_raw.to_string())) {
                continue;
            }

            events.push(ListingEvent {
                page_number,
                label: format!("{name_raw} (page {page_number})"),
                value: page_number,
            });
            entries.push(Entry {
                page_number,
                name_raw: name_raw.to_string(),
                number_key: number_key(name_raw),
                tokens_key: tokens_key(name_raw),
            });
        }
    }

    tracing::debug!(entries = entries.len(), pages = pages_text.len(), "index built");
    (entries, events)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── helpers ──────────────────────────────────────────────────────────────

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn extracts_one_record_per_marker() {
        let (entries, _) = build_index(&pages(&[
            "header Name: Hill Creek Unit 10-28F trailing Name: Federal 01-29 end",
        ]));
        // Without a header rule firing, each name runs to the end of the page
        // text, so the first record swallows the second marker's text too.
        assert_eq!(entries.len(), 2);
        assert!(entries[0].name_raw.starts_with("Hill Creek Unit 10-28F"));
        assert_eq!(entries[1].name_raw, "Federal 01-29 end");
    }

    #[test]
    fn statement_header_rule_cuts_first() {
        let (entries, _) = build_index(&pages(&[
            "Name: Hill Creek Unit 10-28F GAS VOLUME STATEMENT November 2025 vol 123",
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name_raw, "Hill Creek Unit 10-28F");
        assert_eq!(entries[0].number_key.as_deref(), Some("10-28"));
        assert_eq!(entries[0].tokens_key, "HILLCREEKUNIT");
    }

    #[test]
    fn month_year_rule_cuts_when_no_statement_header() {
        let (entries, _) =
            build_index(&pages(&["Name: Federal 01-29 November 2025 production"]));
        assert_eq!(entries[0].name_raw, "Federal 01-29");
    }

    #[test]
    fn month_year_rule_is_case_insensitive() {
        let (entries, _) = build_index(&pages(&["Name: Federal 01-29 NOVEMBER 2025"]));
        assert_eq!(entries[0].name_raw, "Federal 01-29");
    }

    #[test]
    fn month_without_year_is_left_alone() {
        let (entries, _) = build_index(&pages(&["Name: May Unit 5"]));
        assert_eq!(entries[0].name_raw, "May Unit 5");
    }

    #[test]
    fn empty_name_after_stripping_is_skipped() {
        let (entries, events) =
            build_index(&pages(&["Name: GAS VOLUME STATEMENT November 2025"]));
        assert!(entries.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn duplicate_name_on_same_page_indexed_once() {
        let (entries, events) = build_index(&pages(&[
            "Name: Federal 01-29 GAS VOLUME STATEMENT Name: Federal 01-29 GAS VOLUME STATEMENT",
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn same_name_on_different_pages_indexed_per_page() {
        let (entries, _) = build_index(&pages(&[
            "Name: Federal 01-29 GAS VOLUME STATEMENT",
            "Name: Federal 01-29 GAS VOLUME STATEMENT",
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].page_number, 1);
        assert_eq!(entries[1].page_number, 2);
    }

    #[test]
    fn listing_event_carries_label_and_page_value() {
        let (_, events) =
            build_index(&pages(&["", "Name: Hill Creek Unit 10-28F GAS VOLUME STATEMENT"]));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].label, "Hill Creek Unit 10-28F (page 2)");
        assert_eq!(events[0].value, 2);
        assert_eq!(events[0].page_number, 2);
    }

    #[test]
    fn insertion_order_follows_pages_then_occurrence() {
        let (entries, _) = build_index(&pages(&[
            "Name: A Unit 1-2 GAS VOLUME STATEMENT Name: B Unit 3-4 GAS VOLUME STATEMENT",
            "Name: C Unit 5-6 GAS VOLUME STATEMENT",
        ]));
        let names: Vec<&str> = entries.iter().map(|e| e.name_raw.as_str()).collect();
        assert_eq!(names, ["A Unit 1-2", "B Unit 3-4", "C Unit 5-6"]);
    }

    #[test]
    fn pages_without_markers_yield_nothing() {
        let (entries, _) = build_index(&pages(&["no records here", ""]));
        assert!(entries.is_empty());
    }
}
