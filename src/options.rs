//! Per-request parameter set used to expand the eUtils URI template.

use std::fmt;

/// Default page size; the largest `retmax` the eUtils service honors.
pub const DEFAULT_RETMAX: usize = 100_000;

/// Default recency window in days applied to searches.
pub const DEFAULT_RELDATE: u32 = 90;

/// Public eUtils endpoint (scheme + host + path prefix).
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// eUtils API verb; selects the `e{verb}.fcgi` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Search,
    Fetch,
    Link,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Search => "search",
            Verb::Fetch => "fetch",
            Verb::Link => "link",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target collection: primary literature or the journal catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    Pubmed,
    NlmCatalog,
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Pubmed => "pubmed",
            Database::NlmCatalog => "nlmcatalog",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named parameters for one API request.
///
/// An options value is never mutated in place: pagination and chunking build
/// derived copies through the `with_*` methods, so every outstanding request
/// sees a consistent snapshot.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Scheme + host (+ path prefix) the request is sent to.
    pub base: String,
    pub verb: Verb,
    pub database: Database,
    /// Tool identifier reported to the service.
    pub tool: String,
    /// Contact email reported to the service.
    pub email: String,
    /// Recency window in days.
    pub reldate: u32,
    /// Page size.
    pub retmax: usize,
    /// Page offset.
    pub retstart: usize,
    /// Pre-escaped query fragment, e.g. `term=...` or `id=1,2,3`.
    pub query: String,
    /// Extra raw query fragment appended after `retmode`.
    pub extra: Option<String>,
    /// Keep issuing paged searches until every PMID has been collected.
    pub load_all_pmids: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_URL.to_string(),
            verb: Verb::Search,
            database: Database::Pubmed,
            tool: "entrez-client".to_string(),
            email: String::new(),
            reldate: DEFAULT_RELDATE,
            retmax: DEFAULT_RETMAX,
            retstart: 0,
            query: String::new(),
            extra: None,
            load_all_pmids: false,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_verb(mut self, verb: Verb) -> Self {
        self.verb = verb;
        self
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_reldate(mut self, reldate: u32) -> Self {
        self.reldate = reldate;
        self
    }

    pub fn with_retmax(mut self, retmax: usize) -> Self {
        self.retmax = retmax;
        self
    }

    pub fn with_retstart(mut self, retstart: usize) -> Self {
        self.retstart = retstart;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn with_load_all_pmids(mut self, load_all: bool) -> Self {
        self.load_all_pmids = load_all;
        self
    }

    /// Look up the string form of a template placeholder.
    ///
    /// Returns `None` for names the option set does not know about; the
    /// template expander turns that into an empty substitution.
    pub(crate) fn value_of(&self, name: &str) -> Option<String> {
        match name {
            "base" => Some(self.base.clone()),
            "verb" => Some(self.verb.as_str().to_string()),
            "database" => Some(self.database.as_str().to_string()),
            "tool" => Some(self.tool.clone()),
            "email" => Some(self.email.clone()),
            "reldate" => Some(self.reldate.to_string()),
            "retmax" => Some(self.retmax.to_string()),
            "retstart" => Some(self.retstart.to_string()),
            "query" => Some(self.query.clone()),
            "extra" => self.extra.as_ref().map(|extra| format!("&{}", extra)),
            _ => None,
        }
    }
}
