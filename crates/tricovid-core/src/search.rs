//! Autocomplete filtering over the region list.

/// Number of suggestions shown under the search box.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Regions whose name starts with `query`, ignoring case, in catalog order.
///
/// An empty query yields nothing so the dropdown stays closed.
pub fn suggestions<'a>(regions: &'a [String], query: &str, limit: usize) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    regions
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&query))
        .take(limit)
        .map(String::as_str)
        .collect()
}
