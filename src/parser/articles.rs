//! Article-record schema extraction.

use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::{instrument, warn};

use super::{normalize_pmid, strip_inline_html_tags};
use crate::error::{EntrezError, Result};
use crate::models::{Paper, PaperAuthor, PubDate};

#[derive(Debug, Deserialize)]
struct PubmedArticleSet {
    /// Only article records are collected; error placeholders, book
    /// records, and other siblings in the response are skipped.
    #[serde(rename = "PubmedArticle", default)]
    articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    medline_citation: Option<MedlineCitationXml>,
    #[serde(rename = "PubmedData")]
    pubmed_data: Option<PubmedDataXml>,
}

#[derive(Debug, Deserialize)]
struct MedlineCitationXml {
    #[serde(rename = "PMID")]
    pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    article: Option<ArticleXml>,
    #[serde(rename = "MedlineJournalInfo")]
    medline_journal_info: Option<MedlineJournalInfoXml>,
}

#[derive(Debug, Deserialize)]
struct PmidXml {
    #[serde(rename = "$text")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleXml {
    #[serde(rename = "ArticleTitle")]
    title: Option<String>,
    #[serde(rename = "Abstract")]
    abstract_node: Option<AbstractXml>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorListXml>,
    #[serde(rename = "ArticleDate", default)]
    article_dates: Vec<DateXml>,
}

#[derive(Debug, Deserialize)]
struct AbstractXml {
    #[serde(rename = "AbstractText", default)]
    sections: Vec<AbstractSectionXml>,
}

#[derive(Debug, Deserialize)]
struct AbstractSectionXml {
    #[serde(rename = "$text")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthorListXml {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    #[serde(rename = "ForeName")]
    fore_name: Option<String>,
    #[serde(rename = "Initials")]
    initials: Option<String>,
    #[serde(rename = "LastName")]
    last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DateXml {
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MedlineJournalInfoXml {
    #[serde(rename = "NlmUniqueID")]
    nlm_unique_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PubmedDataXml {
    #[serde(rename = "History")]
    history: Option<HistoryXml>,
    #[serde(rename = "ArticleIdList")]
    article_id_list: Option<ArticleIdListXml>,
}

#[derive(Debug, Deserialize)]
struct HistoryXml {
    #[serde(rename = "PubMedPubDate", default)]
    dates: Vec<StatusDateXml>,
}

#[derive(Debug, Deserialize)]
struct StatusDateXml {
    #[serde(rename = "@PubStatus")]
    pub_status: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleIdListXml {
    #[serde(rename = "ArticleId", default)]
    ids: Vec<ArticleIdXml>,
}

#[derive(Debug, Deserialize)]
struct ArticleIdXml {
    #[serde(rename = "@IdType")]
    id_type: Option<String>,
    #[serde(rename = "$text")]
    value: Option<String>,
}

fn to_pub_date(year: &Option<String>, month: &Option<String>, day: &Option<String>) -> PubDate {
    fn part<T: std::str::FromStr + Default>(s: &Option<String>) -> T {
        s.as_deref()
            .map(str::trim)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
    PubDate::new(part(year), part(month), part(day))
}

impl PubmedArticleXml {
    fn into_paper(self) -> Result<Paper> {
        let citation = self
            .medline_citation
            .ok_or_else(|| EntrezError::XmlError("article record without citation".to_string()))?;

        let article = citation
            .article
            .ok_or_else(|| EntrezError::XmlError("article record without article body".to_string()))?;

        // Title is the one unconditional field.
        let title = article
            .title
            .ok_or_else(|| EntrezError::XmlError("article record without title".to_string()))?;

        let abstract_text = article.abstract_node.map(|node| {
            node.sections
                .into_iter()
                .filter_map(|section| section.text)
                .collect::<Vec<_>>()
                .join(" ")
        });

        let article_date = article
            .article_dates
            .first()
            .map(|date| to_pub_date(&date.year, &date.month, &date.day))
            .unwrap_or_default();

        let authors = article
            .author_list
            .map(|list| {
                list.authors
                    .into_iter()
                    .map(|author| PaperAuthor {
                        fore_name: author.fore_name.unwrap_or_default(),
                        initials: author.initials.unwrap_or_default(),
                        last_name: author.last_name.unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let pmid = normalize_pmid(
            &citation
                .pmid
                .and_then(|pmid| pmid.value)
                .unwrap_or_default(),
        );

        let nlm_id = citation
            .medline_journal_info
            .and_then(|info| info.nlm_unique_id)
            .unwrap_or_default();

        let mut pubmed_date = None;
        let mut doi = None;

        if let Some(data) = self.pubmed_data {
            if let Some(history) = data.history {
                // Several status-tagged dates may be present; only the
                // `entrez` entry counts, and the last one seen wins.
                for date in &history.dates {
                    if date.pub_status.as_deref() == Some("entrez") {
                        pubmed_date = Some(to_pub_date(&date.year, &date.month, &date.day));
                    }
                }
            }
            if let Some(id_list) = data.article_id_list {
                for id in id_list.ids {
                    if id.id_type.as_deref() == Some("doi") {
                        doi = id.value;
                    }
                }
            }
        }

        Ok(Paper {
            pmid,
            title,
            abstract_text,
            article_date,
            pubmed_date,
            date_appeared: pubmed_date,
            doi,
            authors,
            nlm_id,
            url: None,
            complete: None,
            pdf_url: None,
        })
    }
}

/// Parse every article record in an EFetch response.
///
/// Elements that are not article records are skipped silently; records that
/// fail extraction (no title) are logged and skipped without failing the
/// batch.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_papers(xml: &str) -> Result<Vec<Paper>> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| EntrezError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let papers: Vec<Paper> = article_set
        .articles
        .into_iter()
        .filter_map(|article| match article.into_paper() {
            Ok(paper) => Some(paper),
            Err(e) => {
                warn!(error = %e, "Failed to parse article record, skipping");
                None
            }
        })
        .collect();

    Ok(papers)
}
