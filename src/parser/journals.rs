//! Journal-catalog schema extraction.

use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{EntrezError, Result};
use crate::models::Journal;

#[derive(Debug, Deserialize)]
struct NlmCatalogRecordSet {
    #[serde(rename = "NLMCatalogRecord", default)]
    records: Vec<NlmCatalogRecordXml>,
}

#[derive(Debug, Deserialize)]
struct NlmCatalogRecordXml {
    #[serde(rename = "NlmUniqueID")]
    nlm_unique_id: Option<String>,
    #[serde(rename = "TitleMain")]
    title_main: Option<TitleMainXml>,
    #[serde(rename = "MedlineTA")]
    medline_ta: Option<String>,
    #[serde(rename = "ISSN", default)]
    issns: Vec<IssnXml>,
    #[serde(rename = "PublicationInfo")]
    publication_info: Option<PublicationInfoXml>,
}

#[derive(Debug, Deserialize)]
struct TitleMainXml {
    #[serde(rename = "Title")]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IssnXml {
    #[serde(rename = "$text")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PublicationInfoXml {
    #[serde(rename = "PublicationFirstYear")]
    first_year: Option<String>,
    #[serde(rename = "Frequency", default)]
    frequencies: Vec<FrequencyXml>,
}

#[derive(Debug, Deserialize)]
struct FrequencyXml {
    #[serde(rename = "$text")]
    value: Option<String>,
}

impl NlmCatalogRecordXml {
    fn into_journal(self) -> Journal {
        let (started_year, frequency) = match self.publication_info {
            Some(info) => (
                info.first_year.unwrap_or_default(),
                info.frequencies
                    .into_iter()
                    .find_map(|frequency| frequency.value)
                    .unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        Journal {
            issn: self
                .issns
                .into_iter()
                .find_map(|issn| issn.value)
                .unwrap_or_default(),
            nlm_id: self.nlm_unique_id.unwrap_or_default(),
            title_long: self
                .title_main
                .and_then(|title| title.title)
                .unwrap_or_default(),
            title_short: self.medline_ta.unwrap_or_default(),
            started_year,
            frequency,
        }
    }
}

/// Parse every catalog record in an EFetch response against the journal
/// catalog. One `Journal` per record; absent fields yield empty strings,
/// never an error.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_journals(xml: &str) -> Result<Vec<Journal>> {
    let record_set: NlmCatalogRecordSet = from_str(xml)
        .map_err(|e| EntrezError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    Ok(record_set
        .records
        .into_iter()
        .map(NlmCatalogRecordXml::into_journal)
        .collect())
}
