/// Canonical form for all text comparison: uppercase, every character
/// outside `A-Z 0-9 space -` replaced by a space, whitespace runs collapsed
/// to one space, trimmed.
///
/// Idempotent: normalizing an already-normalized string is a no-op, which is
/// what lets the engine compare query signatures by plain string equality.
pub fn normalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = true;

    for c in s.chars().flat_map(char::to_uppercase) {
        if matches!(c, 'A'..='Z' | '0'..='9' | '-') {
            out.push(c);
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }

    out
}
