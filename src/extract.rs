use std::path::Path;

use anyhow::{Context, Result};
use lopdf::Document;
use rayon::prelude::*;
use unidecode::unidecode;

/// Pull per-page text out of a statement PDF, 1-indexed by position and
/// ordered by page number.
///
/// This is the boundary between the document and the matching core: nothing
/// past here touches PDF bytes. A page whose text cannot be decoded becomes
/// an empty block so page numbering stays aligned.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>> {
    let doc = Document::load_mem(bytes).context("failed to parse PDF")?;
    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

    let pages = page_numbers
        .par_iter()
        .map(|&page| clean_page_text(&doc.extract_text(&[page]).unwrap_or_default()))
        .collect();

    Ok(pages)
}

pub fn extract_pages_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let bytes = std::fs::read(path.as_ref())
        .with_context(|| format!("failed to read {}", path.as_ref().display()))?;
    extract_pages(&bytes)
}

/// Flatten extractor output into one block per page: ASCII-fold, trim each
/// line, drop blank lines, join with single spaces.
fn clean_page_text(text: &str) -> String {
    unidecode(text)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_joins_lines_with_single_spaces() {
        assert_eq!(
            clean_page_text("Name: Hill Creek\n  Unit 10-28F\n\n"),
            "Name: Hill Creek Unit 10-28F"
        );
    }

    #[test]
    fn clean_folds_non_ascii() {
        assert_eq!(clean_page_text("caf\u{e9} \u{2014} unit"), "cafe -- unit");
    }

    #[test]
    fn garbage_bytes_are_an_error_not_a_panic() {
        assert!(extract_pages(b"not a pdf").is_err());
    }
}
