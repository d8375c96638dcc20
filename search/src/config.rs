#[derive(Debug, Clone, Copy, Default)]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

/// Per-field relevance multipliers.
///
/// Title matches dominate; tags contribute least.
#[derive(Debug, Clone, Copy)]
pub struct FieldWeights {
    pub title: f32,
    pub description: f32,
    pub category: f32,
    pub tags: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 2.0,
            description: 1.5,
            category: 1.0,
            tags: 0.8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    pub weights: FieldWeights,
    /// Queries that trim below this length return no results.
    pub min_query_len: usize,
    /// Query tokens shorter than this are dropped before matching.
    pub min_token_len: usize,
    /// Result cap applied by the interactive search panel.
    pub panel_result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            weights: FieldWeights::default(),
            min_query_len: 2,
            min_token_len: 2,
            panel_result_limit: 8,
        }
    }
}
