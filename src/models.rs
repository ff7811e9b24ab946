//! Typed records returned by the client.
//!
//! All records are created fresh per call and carry no shared state; the
//! crate keeps nothing alive between calls beyond the rate limiter's last
//! request timestamp.

use serde::{Deserialize, Serialize};

/// Result of one search, possibly accumulated over several pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matches reported by the service. May exceed
    /// `pmids.len()` when only one page was requested.
    pub count: u64,
    /// Matching record ids in page order. Ids are kept as opaque strings;
    /// some deployments hand out ids that overflow machine integers.
    pub pmids: Vec<String>,
    /// MeSH vocabulary terms the service used to translate the query.
    /// Populated from the first page only.
    pub mesh_terms: Vec<String>,
    /// Query phrases the service could not interpret. First page only.
    pub phrases_not_found: Vec<String>,
}

/// A calendar date as the API reports it.
///
/// The default value is the defined zero date, used when a record carries no
/// usable date rather than failing the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PubDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// One author of a paper. Missing name parts stay empty rather than
/// dropping the author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAuthor {
    pub fore_name: String,
    pub initials: String,
    pub last_name: String,
}

/// Article metadata from the literature database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    /// Record id, digits only, at most 8 characters.
    pub pmid: String,
    pub title: String,
    /// Absent when the record has no abstract.
    pub abstract_text: Option<String>,
    /// Electronic publication date; the zero date when the record has none.
    pub article_date: PubDate,
    /// Date the record entered the database.
    pub pubmed_date: Option<PubDate>,
    /// Same source as `pubmed_date`; kept as a separate field for callers
    /// that track first appearance.
    pub date_appeared: Option<PubDate>,
    pub doi: Option<String>,
    pub authors: Vec<PaperAuthor>,
    /// Unique id of the journal that published the article.
    pub nlm_id: String,
    /// Full-text URL, when a link provider offers one.
    pub url: Option<String>,
    /// Reserved; not populated by the parser.
    pub complete: Option<bool>,
    /// Reserved; not populated by the parser.
    pub pdf_url: Option<String>,
}

impl Paper {
    /// Render the author list as `"<initials> <last name>"` pairs joined by
    /// `", "`. Missing parts render as empty slots; no author is dropped.
    pub fn author_string(&self) -> String {
        self.authors
            .iter()
            .map(|author| format!("{} {}", author.initials, author.last_name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Journal metadata from the catalog database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub issn: String,
    pub nlm_id: String,
    pub title_long: String,
    pub title_short: String,
    pub started_year: String,
    pub frequency: String,
}

/// One full-text link offered by an external provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTextLink {
    pub url: String,
    pub provider_id: String,
    pub provider_name: String,
    pub category: String,
}
