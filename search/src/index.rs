//! Index construction: collection items mapped into searchable records.

use harviera_core::types::{
    BlogPost, CaseStudy, Collections, Guide, Industry, RecordKind, SearchRecord, Service,
};
use nucleo::Utf32String;

/// A record plus its pre-computed UTF-32 match columns.
///
/// Columns are decoded once at build time so query execution never
/// re-decodes haystacks.
pub(crate) struct Entry {
    pub(crate) record: SearchRecord,
    pub(crate) title: Utf32String,
    pub(crate) description: Utf32String,
    pub(crate) category: Option<Utf32String>,
    pub(crate) tags: Vec<Utf32String>,
}

impl Entry {
    fn new(record: SearchRecord) -> Self {
        let title = Utf32String::from(record.title.as_str());
        let description = Utf32String::from(record.description.as_str());
        let category = record.category.as_deref().map(Utf32String::from);
        let tags = record
            .tags
            .iter()
            .map(|tag| Utf32String::from(tag.as_str()))
            .collect();

        Self {
            record,
            title,
            description,
            category,
            tags,
        }
    }
}

/// Immutable record set over all collections, in collection order.
pub(crate) struct Index {
    entries: Vec<Entry>,
}

impl Index {
    /// Maps every item of every collection into the index.
    ///
    /// Missing optional fields degrade to empty values; building never
    /// fails and the source collections are untouched.
    pub(crate) fn build(content: &Collections) -> Self {
        let mut entries = Vec::with_capacity(content.len());

        entries.extend(content.services.iter().map(service_record).map(Entry::new));
        entries.extend(
            content
                .industries
                .iter()
                .map(industry_record)
                .map(Entry::new),
        );
        entries.extend(
            content
                .case_studies
                .iter()
                .map(case_study_record)
                .map(Entry::new),
        );
        entries.extend(
            content
                .blog_posts
                .iter()
                .map(blog_post_record)
                .map(Entry::new),
        );
        entries.extend(content.guides.iter().map(guide_record).map(Entry::new));

        Self { entries }
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

fn service_record(service: &Service) -> SearchRecord {
    SearchRecord {
        id: service.slug.clone(),
        title: service.title.clone(),
        description: service.description.clone(),
        kind: RecordKind::Service,
        url: RecordKind::Service.url_for(&service.slug),
        category: Some("Services".to_string()),
        tags: service.technologies.clone(),
    }
}

fn industry_record(industry: &Industry) -> SearchRecord {
    SearchRecord {
        id: industry.slug.clone(),
        title: industry.title.clone(),
        description: industry.description.clone(),
        kind: RecordKind::Industry,
        url: RecordKind::Industry.url_for(&industry.slug),
        category: Some("Industries".to_string()),
        tags: Vec::new(),
    }
}

fn case_study_record(study: &CaseStudy) -> SearchRecord {
    // Older studies carry only a challenge paragraph.
    let description = study
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
        .or_else(|| study.challenge.as_deref().filter(|text| !text.is_empty()))
        .unwrap_or_default()
        .to_string();

    // Industry name first, then delivered services. Empty strings are
    // dropped so they can never attract matches.
    let tags = study
        .industry
        .iter()
        .chain(study.services.iter())
        .filter(|tag| !tag.is_empty())
        .cloned()
        .collect();

    SearchRecord {
        id: study.slug.clone(),
        title: study.title.clone(),
        description,
        kind: RecordKind::CaseStudy,
        url: RecordKind::CaseStudy.url_for(&study.slug),
        category: Some("Case Studies".to_string()),
        tags,
    }
}

fn blog_post_record(post: &BlogPost) -> SearchRecord {
    SearchRecord {
        id: post.slug.clone(),
        title: post.title.clone(),
        description: post.excerpt.clone(),
        kind: RecordKind::Blog,
        url: RecordKind::Blog.url_for(&post.slug),
        category: Some(post.category.clone()),
        tags: post.tags.clone(),
    }
}

fn guide_record(guide: &Guide) -> SearchRecord {
    SearchRecord {
        id: guide.slug.clone(),
        title: guide.title.clone(),
        description: guide.description.clone(),
        kind: RecordKind::Guide,
        url: RecordKind::Guide.url_for(&guide.slug),
        category: Some(guide.category.clone()),
        tags: guide.tags.clone(),
    }
}
