use crate::normalize::normalize_words;

/// Numeric identity key parsed from a record name.
///
/// Takes every maximal digit run left to right and parses each as an integer,
/// so leading zeros disappear (`"01-29"` keys as `"1-29"`). Two or more runs
/// give `"A-B"` from the first two; further runs are ignored, on the
/// assumption that the first two digit groups are the well/unit number.
/// Exactly one run gives `"A"`; a name with no digits has no numeric key.
pub fn number_key(text: &str) -> Option<String> {
    let mut numbers = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<u64>().ok());

    let first = numbers.next()?;
    match numbers.next() {
        Some(second) => Some(format!("{first}-{second}")),
        None => Some(first.to_string()),
    }
}

/// Letter-only fuzzy identity key for a record name.
///
/// Normalizes, drops every word that carries a digit (removes number-bearing
/// chunks such as `"10-28F"`), then strips anything that is not a letter.
/// `"HILL CREEK UNIT 10-28F"` -> `"HILLCREEKUNIT"`.
pub fn tokens_key(name_raw: &str) -> String {
    let words = normalize_words(name_raw)
        .split(' ')
        .filter(|word| !word.chars().any(|c| c.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ");
    letters_only(&words)
}

/// Strip everything but letters. Input is expected to be normalized already,
/// so the survivors are all `A-Z`.
pub(crate) fn letters_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphabetic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_key_takes_first_two_digit_runs() {
        assert_eq!(number_key("HILL CREEK UNIT 10-28F"), Some("10-28".into()));
    }

    #[test]
    fn number_key_drops_leading_zeros() {
        assert_eq!(number_key("FEDERAL 01-29"), Some("1-29".into()));
    }

    #[test]
    fn number_key_single_run() {
        assert_eq!(number_key("JUST7"), Some("7".into()));
    }

    #[test]
    fn number_key_absent_without_digits() {
        assert_eq!(number_key("NO DIGITS HERE"), None);
    }

    #[test]
    fn number_key_ignores_runs_past_the_second() {
        // First two digit groups win, even with trailing numbers in the name.
        assert_eq!(number_key("UNIT 10-28F TRACT 99"), Some("10-28".into()));
    }

    #[test]
    fn number_key_skips_oversized_runs() {
        // A run too large for u64 is not an integer we can use.
        assert_eq!(
            number_key("X99999999999999999999999999Y12"),
            Some("12".into())
        );
    }

    #[test]
    fn tokens_key_strips_numbered_words() {
        assert_eq!(tokens_key("HILL CREEK UNIT 10-28F"), "HILLCREEKUNIT");
    }

    #[test]
    fn tokens_key_normalizes_first() {
        assert_eq!(tokens_key("hill creek, unit #10-28f"), "HILLCREEKUNIT");
    }

    #[test]
    fn tokens_key_empty_for_all_numeric_names() {
        assert_eq!(tokens_key("10-28"), "");
    }
}
