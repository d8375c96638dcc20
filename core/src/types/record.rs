//! The uniform record shape every content item is normalized into
//! before indexing.

use crate::types::Slug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which collection a search record came from.
///
/// Closed set. The presentation layer maps it to icons, labels and
/// filter chips; the search core only uses it for exact-kind filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Service,
    Industry,
    CaseStudy,
    Blog,
    Guide,
}

impl RecordKind {
    /// Every kind, in display order.
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Service,
        RecordKind::Industry,
        RecordKind::CaseStudy,
        RecordKind::Blog,
        RecordKind::Guide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Service => "service",
            RecordKind::Industry => "industry",
            RecordKind::CaseStudy => "case-study",
            RecordKind::Blog => "blog",
            RecordKind::Guide => "guide",
        }
    }

    /// Canonical site path for an item of this kind.
    pub fn url_for(self, slug: &Slug) -> String {
        match self {
            RecordKind::Service => format!("/services/{slug}"),
            RecordKind::Industry => format!("/solutions/{slug}"),
            RecordKind::CaseStudy => format!("/case-studies/{slug}"),
            RecordKind::Blog => format!("/resources/blog/{slug}"),
            RecordKind::Guide => format!("/resources/guides/{slug}"),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit indexed and returned by search.
///
/// `id` is unique within its kind. Serializes to the
/// `{id, title, description, type, url, category?, tags?}` shape the
/// presentation layer consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: Slug,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
