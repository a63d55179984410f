use crate::index::Entry;
use crate::keys::{letters_only, number_key};
use crate::normalize::normalize_words;

/// How many ranked entries a query keeps as its match list.
pub const MAX_MATCHES: usize = 20;

/// Keys derived once from a raw query and compared against every entry.
#[derive(Debug, Clone)]
pub struct QueryKeys {
    /// Normalized query text; doubles as the session's repeat-detection
    /// signature.
    pub signature: String,
    tokens_key: String,
    number_key: Option<String>,
}

impl QueryKeys {
    pub fn derive(raw_query: &str) -> Self {
        let signature = normalize_words(raw_query);
        QueryKeys {
            tokens_key: letters_only(&signature),
            number_key: number_key(&signature),
            signature,
        }
    }
}

/// Score an entry against a query. Lower is better, most negative is best;
/// the value may go either side of zero and is never used as a hard filter.
///
/// Numeric identity dominates: an exact number-key match outweighs anything
/// the token term can contribute. Token containment and shared-prefix length
/// separate entries whose numbers are merely close.
pub fn score_entry(query: &QueryKeys, entry: &Entry) -> i64 {
    let mut score = 0i64;

    if let Some(q_num) = &query.number_key {
        match &entry.number_key {
            Some(e_num) if e_num == q_num => score -= 1000,
            Some(e_num) => match (parse_pair(q_num), parse_pair(e_num)) {
                (Some((qa, qb)), Some((ea, eb))) => {
                    score += (qa.abs_diff(ea) + qb.abs_diff(eb)) as i64;
                }
                // one side is a bare "A" key while the other is "A-B"
                _ => score += 50,
            },
            None => score += 200,
        }
    }

    if !query.tokens_key.is_empty() {
        if entry.tokens_key.contains(&query.tokens_key) {
            score -= 300;
        } else if query.tokens_key.contains(&entry.tokens_key) {
            score -= 150;
        } else {
            let common = common_prefix_len(&entry.tokens_key, &query.tokens_key);
            score += 20 - common.min(20) as i64 + 50;
        }
    }

    score
}

/// Rank the whole index against a query.
///
/// Every entry is scored and stable-sorted ascending, so equal scores keep
/// insertion order. Entries that earned a boost (negative score) form the
/// match list; when nothing scored favorably the least-bad entries are kept
/// instead, so a non-empty index always yields candidates. Capped at
/// [`MAX_MATCHES`] either way.
pub fn rank_entries(entries: &[Entry], query: &QueryKeys) -> Vec<Entry> {
    let mut scored: Vec<(i64, &Entry)> = entries
        .iter()
        .map(|entry| (score_entry(query, entry), entry))
        .collect();
    scored.sort_by_key(|&(score, _)| score);

    let favorable = scored.iter().take_while(|&&(score, _)| score < 0).count();
    if favorable > 0 {
        scored.truncate(favorable);
    }
    scored.truncate(MAX_MATCHES);
    scored.into_iter().map(|(_, entry)| entry.clone()).collect()
}

fn parse_pair(key: &str) -> Option<(u64, u64)> {
    let (a, b) = key.split_once('-')?;
    Some((a.parse().ok()?, b.parse().ok()?))
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
