//! Full-text link schema extraction.

use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{EntrezError, Result};
use crate::models::FullTextLink;

#[derive(Debug, Deserialize)]
struct ELinkResultXml {
    #[serde(rename = "LinkSet", default)]
    link_sets: Vec<LinkSetXml>,
}

#[derive(Debug, Deserialize)]
struct LinkSetXml {
    #[serde(rename = "IdUrlList")]
    id_url_list: Option<IdUrlListXml>,
}

#[derive(Debug, Deserialize)]
struct IdUrlListXml {
    #[serde(rename = "IdUrlSet", default)]
    sets: Vec<IdUrlSetXml>,
}

#[derive(Debug, Deserialize)]
struct IdUrlSetXml {
    #[serde(rename = "Id")]
    id: Option<String>,
    #[serde(rename = "ObjUrl", default)]
    urls: Vec<ObjUrlXml>,
}

#[derive(Debug, Deserialize)]
struct ObjUrlXml {
    #[serde(rename = "Url")]
    url: Option<String>,
    #[serde(rename = "Category", default)]
    categories: Vec<String>,
    #[serde(rename = "Provider")]
    provider: Option<ProviderXml>,
}

#[derive(Debug, Deserialize)]
struct ProviderXml {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Id")]
    id: Option<String>,
}

/// Parse an eLink prlinks response into `(pmid, links)` pairs.
///
/// Each `IdUrlSet` group is keyed by its embedded record id; every
/// contained link object becomes one [`FullTextLink`]. Ids without any link
/// produce no pair, so they never appear as map keys downstream.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_links(xml: &str) -> Result<Vec<(String, Vec<FullTextLink>)>> {
    let elink: ELinkResultXml = from_str(xml)
        .map_err(|e| EntrezError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let mut pairs = Vec::new();

    for link_set in elink.link_sets {
        let Some(id_url_list) = link_set.id_url_list else {
            continue;
        };

        for set in id_url_list.sets {
            let Some(id) = set.id else { continue };
            if set.urls.is_empty() {
                continue;
            }

            let links = set
                .urls
                .into_iter()
                .map(|obj| {
                    let (provider_name, provider_id) = match obj.provider {
                        Some(provider) => (
                            provider.name.unwrap_or_default(),
                            provider.id.unwrap_or_default(),
                        ),
                        None => (String::new(), String::new()),
                    };
                    FullTextLink {
                        url: obj.url.unwrap_or_default(),
                        provider_id,
                        provider_name,
                        category: obj.categories.into_iter().next().unwrap_or_default(),
                    }
                })
                .collect();

            pairs.push((id, links));
        }
    }

    Ok(pairs)
}
