//! Search-box matching shared by list pages.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Case-insensitive substring match. A blank query matches everything.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// True when any of `fields` matches `query`.
pub fn any_matches<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || fields.into_iter().any(|field| matches_query(field, query))
}
