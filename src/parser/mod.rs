//! Response normalization.
//!
//! Four independent, stateless extractors, one per response schema the API
//! serves: search results, article records, journal-catalog records, and
//! full-text link sets. Each maps one XML document to typed records and
//! recovers locally from missing optional fields instead of failing the
//! document.

mod articles;
mod journals;
mod links;
mod search;

pub use articles::parse_papers;
pub use journals::parse_journals;
pub use links::parse_links;
pub use search::parse_search;

use std::sync::OnceLock;

use regex::Regex;

/// Normalize a raw PMID: drop literal periods, keep at most the first 8
/// characters. Guards against malformed upstream ids that embed
/// period-separated version suffixes. Idempotent.
pub fn normalize_pmid(raw: &str) -> String {
    raw.chars().filter(|c| *c != '.').take(8).collect()
}

/// Strip inline HTML-like formatting tags from XML content.
///
/// Tags like `<i>`, `<sup>`, `<sub>` appear inside titles and abstracts and
/// break quick-xml's text extraction for those elements.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("Failed to compile inline tag regex")
    });

    re.replace_all(xml, "").into_owned()
}
