//! Content collection item types.
//!
//! Each type mirrors one content collection of the site and carries the
//! fields the search mapping consumes. Optional fields default to empty
//! so a sparse item never fails deserialization.

use crate::error::{ContentError, Result};
use crate::types::Slug;
use serde::{Deserialize, Serialize};

/// An entry of the services collection (`/services/{slug}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// An entry of the industries collection (`/solutions/{slug}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    pub slug: Slug,
    pub title: String,
    pub description: String,
}

/// An entry of the case studies collection (`/case-studies/{slug}`).
///
/// Older studies carry no summary `description`, only a `challenge`
/// paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub slug: Slug,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// An entry of the blog collection (`/resources/blog/{slug}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: Slug,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An entry of the guides collection (`/resources/guides/{slug}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guide {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The full contents of all five collections, in source order.
///
/// Collection order is preserved verbatim; it is the tiebreak order of
/// the search index built from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collections {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub industries: Vec<Industry>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub guides: Vec<Guide>,
}

impl Collections {
    /// Parses collections from an exported content JSON payload.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let collections = serde_json::from_str(json).map_err(ContentError::Malformed)?;
        Ok(collections)
    }

    /// Total number of items across all collections.
    pub fn len(&self) -> usize {
        self.services.len()
            + self.industries.len()
            + self.case_studies.len()
            + self.blog_posts.len()
            + self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
