//! Search results types.

use harviera_core::types::{RecordKind, SearchRecord};
use std::collections::BTreeMap;

/// Ranked search results, best match first.
///
/// Borrows records from the engine; iteration is zero-copy. Relevance
/// scores are internal; callers consume only the ordering.
pub struct SearchResults<'a> {
    hits: Vec<&'a SearchRecord>,
    panel_limit: usize,
}

impl<'a> SearchResults<'a> {
    pub(crate) fn new(hits: Vec<&'a SearchRecord>, panel_limit: usize) -> Self {
        Self { hits, panel_limit }
    }

    pub(crate) fn empty(panel_limit: usize) -> Self {
        Self {
            hits: Vec::new(),
            panel_limit,
        }
    }

    /// Iterates over ranked records, best match first.
    pub fn iter(&self) -> impl Iterator<Item = &'a SearchRecord> + '_ {
        self.hits.iter().copied()
    }

    /// Records of one kind, ranking order preserved.
    ///
    /// Backs the search page's one-active-filter chips.
    pub fn of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &'a SearchRecord> + '_ {
        self.hits
            .iter()
            .copied()
            .filter(move |record| record.kind == kind)
    }

    /// Result count per kind over the unfiltered set.
    ///
    /// Drives the filter chip labels on the search page.
    pub fn kind_counts(&self) -> BTreeMap<RecordKind, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.hits {
            *counts.entry(record.kind).or_insert(0) += 1;
        }
        counts
    }

    /// The top results shown by the interactive search panel.
    pub fn panel(&self) -> impl Iterator<Item = &'a SearchRecord> + '_ {
        self.hits.iter().copied().take(self.panel_limit)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
