//! Search-result schema extraction.

use std::sync::OnceLock;

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use tracing::debug;

use crate::error::{EntrezError, Result};
use crate::models::SearchResult;

/// Pattern the service uses for controlled-vocabulary terms inside the
/// translation stack, e.g. `"mus musculus"[MeSH Terms]`.
fn mesh_term_regex() -> &'static Regex {
    static MESH_TERM_REGEX: OnceLock<Regex> = OnceLock::new();
    MESH_TERM_REGEX.get_or_init(|| {
        Regex::new(r#""(.*)"\[MeSH Terms\]"#).expect("Failed to compile MeSH term regex")
    })
}

/// Parse an eSearchResult document.
///
/// Extracts the total match count, the id list (ids stay opaque strings),
/// the MeSH terms embedded in the translation stack, and any
/// phrase-not-found entries verbatim. The translation stack interleaves
/// term sets with boolean operators, so this extractor walks events rather
/// than deserializing a fixed shape.
pub fn parse_search(xml: &str) -> Result<SearchResult> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut results = SearchResult::default();
    let mut have_count = false;

    let mut in_id_list = false;
    let mut in_translation_stack = false;
    let mut in_term_set = false;
    let mut in_error_list = false;
    let mut in_count = false;
    let mut in_id = false;
    let mut in_term = false;
    let mut in_phrase_not_found = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"IdList" => in_id_list = true,
                b"TranslationStack" => in_translation_stack = true,
                b"TermSet" if in_translation_stack => in_term_set = true,
                b"ErrorList" => in_error_list = true,
                // TermSet carries its own per-term Count; only the
                // document-level one is the result count.
                b"Count" if !in_translation_stack => in_count = true,
                b"Id" if in_id_list => in_id = true,
                b"Term" if in_term_set => in_term = true,
                b"PhraseNotFound" if in_error_list => in_phrase_not_found = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"IdList" => in_id_list = false,
                b"TranslationStack" => in_translation_stack = false,
                b"TermSet" => in_term_set = false,
                b"ErrorList" => in_error_list = false,
                b"Count" => in_count = false,
                b"Id" => in_id = false,
                b"Term" => in_term = false,
                b"PhraseNotFound" => in_phrase_not_found = false,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| EntrezError::XmlError(format!("Failed to decode XML text: {}", e)))?
                    .into_owned();

                if in_count && !have_count {
                    results.count = text.trim().parse().unwrap_or(0);
                    have_count = true;
                } else if in_id {
                    results.pmids.push(text);
                } else if in_term {
                    if let Some(caps) = mesh_term_regex().captures(&text) {
                        results.mesh_terms.push(caps[1].to_string());
                    }
                } else if in_phrase_not_found {
                    results.phrases_not_found.push(text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(EntrezError::XmlError(format!("XML parsing error: {}", e)));
            }
            _ => {}
        }
    }

    debug!(
        count = results.count,
        pmids = results.pmids.len(),
        mesh_terms = results.mesh_terms.len(),
        phrases_not_found = results.phrases_not_found.len(),
        "Parsed search response"
    );

    Ok(results)
}
