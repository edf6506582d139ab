//! Free-text normalization for comma-separated profile fields.

/// Splits a comma-separated string into trimmed, lowercased tokens.
///
/// Empty and whitespace-only segments are dropped. Tokens are not
/// deduplicated, so `"java, Java"` yields two entries.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Trims and lowercases a single free-text value.
pub fn normalize_phrase(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when either string contains the other. Both inputs must already be lowercase.
pub(crate) fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
