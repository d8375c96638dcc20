//! Search query types.

/// Query type for search.
///
/// Currently supports fuzzy search only. Designed to be extensible
/// for future exact-phrase support.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Fuzzy matching search.
    Fuzzy(String),
}

impl SearchQuery {
    pub fn fuzzy(query: impl Into<String>) -> Self {
        SearchQuery::Fuzzy(query.into())
    }
}
