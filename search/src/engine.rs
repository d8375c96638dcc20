//! Search engine over the immutable content index.

use crate::config::{CaseMatching, SearchConfig};
use crate::index::{Entry, Index};
use crate::query::SearchQuery;
use crate::results::SearchResults;
use harviera_core::types::{Collections, SearchRecord};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher};

/// Fuzzy search engine over all content collections.
///
/// Built once from the full collections and immutable thereafter.
/// Content changes are handled by building a fresh engine and swapping
/// it in wholesale. `search` takes `&self` and allocates its own
/// scratch matcher, so a shared engine is safe for concurrent readers.
pub struct SearchEngine {
    index: Index,
    config: SearchConfig,
}

/// Construction.
impl SearchEngine {
    /// Builds the index by mapping every item of every collection into
    /// a searchable record.
    ///
    /// Missing optional fields degrade to empty values; building never
    /// fails.
    pub fn new(content: &Collections, config: SearchConfig) -> Self {
        let index = Index::build(content);
        tracing::debug!(records = index.len(), "search index built");

        Self { index, config }
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }

    /// Indexed records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &SearchRecord> + '_ {
        self.index.entries().iter().map(|entry| &entry.record)
    }
}

/// Search operations.
impl SearchEngine {
    /// Runs a query and returns records ranked best match first.
    ///
    /// Queries that trim below the minimum length return empty results
    /// without matching, as do queries with no matching record. Never
    /// errors.
    pub fn search(&self, query: &SearchQuery) -> SearchResults<'_> {
        let SearchQuery::Fuzzy(raw) = query;

        let Some(pattern) = self.parse_pattern(raw) else {
            tracing::debug!(query = raw.as_str(), "query below minimum length");
            return SearchResults::empty(self.config.panel_result_limit);
        };

        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);

        let mut scored: Vec<(f32, &Entry)> = self
            .index
            .entries()
            .iter()
            .filter_map(|entry| {
                self.score(&pattern, &mut matcher, entry)
                    .map(|score| (score, entry))
            })
            .collect();

        // Stable sort keeps insertion order for equal scores.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let hits: Vec<&SearchRecord> = scored
            .into_iter()
            .map(|(_, entry)| &entry.record)
            .collect();
        tracing::debug!(query = raw.as_str(), hits = hits.len(), "query executed");

        SearchResults::new(hits, self.config.panel_result_limit)
    }

    /// Parses the raw query into a match pattern.
    ///
    /// Returns `None` when the trimmed query falls below the minimum
    /// length or no token survives the per-token floor.
    fn parse_pattern(&self, raw: &str) -> Option<Pattern> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < self.config.min_query_len {
            return None;
        }

        let tokens: Vec<&str> = trimmed
            .split_whitespace()
            .filter(|token| token.chars().count() >= self.config.min_token_len)
            .collect();
        if tokens.is_empty() {
            return None;
        }

        let case_matching = match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if self.config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        Some(Pattern::parse(
            &tokens.join(" "),
            case_matching,
            normalization,
        ))
    }

    /// Weighted relevance score for one record, or `None` when no
    /// field matches.
    ///
    /// Field scores are summed after weighting; the tags contribution
    /// is the best-scoring single tag.
    fn score(&self, pattern: &Pattern, matcher: &mut Matcher, entry: &Entry) -> Option<f32> {
        let weights = &self.config.weights;
        let mut total = None;

        if let Some(score) = pattern.score(entry.title.slice(..), matcher) {
            *total.get_or_insert(0.0) += score as f32 * weights.title;
        }
        if let Some(score) = pattern.score(entry.description.slice(..), matcher) {
            *total.get_or_insert(0.0) += score as f32 * weights.description;
        }
        if let Some(category) = &entry.category {
            if let Some(score) = pattern.score(category.slice(..), matcher) {
                *total.get_or_insert(0.0) += score as f32 * weights.category;
            }
        }

        let best_tag = entry
            .tags
            .iter()
            .filter_map(|tag| pattern.score(tag.slice(..), matcher))
            .max();
        if let Some(score) = best_tag {
            *total.get_or_insert(0.0) += score as f32 * weights.tags;
        }

        total
    }
}
