/// Case-insensitive substring search.
///
/// The `needle` is expected to be lowercase already, see [`normalize_query`].
pub fn contains_lowercase(haystack: &str, lowercase_needle: &str) -> bool {
    if lowercase_needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Lowercases a free-text query, `None` if it is empty.
///
/// Whitespace is part of the query and never trimmed.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    Some(query.to_lowercase())
}

/// Collapses surrounding whitespace, `None` if the text is blank.
pub fn non_blank(text: &str) -> Option<String> {
    match text.trim() {
        t if t.is_empty() => None,
        t => Some(t.to_string()),
    }
}
