//! Bulk record fetching: papers, journals, and full-text links.

use std::collections::HashMap;

use tracing::{info, instrument, warn};

use super::EntrezClient;
use crate::error::{EntrezError, Result};
use crate::fetcher::RecordFetcher;
use crate::models::{FullTextLink, Journal, Paper};
use crate::options::{Database, Verb};
use crate::parser::{parse_journals, parse_links, parse_papers};

impl EntrezClient {
    /// Fetch article records for the given PMIDs.
    ///
    /// Ids are fetched in batches; record order follows batch order. After
    /// parsing, one link lookup attaches a full-text URL to every paper
    /// whose id resolves to at least one provider link.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entrez_client::EntrezClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EntrezClient::new();
    ///     let papers = client.fetch_papers(&["25554862".to_string()]).await?;
    ///     for paper in &papers {
    ///         println!("{}: {}", paper.pmid, paper.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmids_count = pmids.len()))]
    pub async fn fetch_papers(&self, pmids: &[String]) -> Result<Vec<Paper>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let options = self.config().request_options(Verb::Fetch, Database::Pubmed);
        let fetcher = RecordFetcher::new(self.transport());
        let mut papers = fetcher.fetch(pmids, &options, parse_papers).await?;

        let links = self.fetch_full_text_links(pmids).await?;
        for paper in &mut papers {
            if let Some(link) = links.get(&paper.pmid).and_then(|links| links.first()) {
                paper.url = Some(link.url.clone());
            }
        }

        info!(
            requested = pmids.len(),
            fetched = papers.len(),
            "Papers fetched"
        );

        Ok(papers)
    }

    /// Fetch journal catalog records for the given NLM ids.
    ///
    /// Ids carrying a non-numeric marker cannot be fetched directly and are
    /// resolved through a catalog search first. An id whose resolution is
    /// ambiguous is reported and skipped; its siblings are still fetched.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entrez_client::EntrezClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EntrezClient::new();
    ///     let journals = client.fetch_journals(&["0401141".to_string()]).await?;
    ///     println!("{}", journals[0].title_long);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(ids_count = nlm_ids.len()))]
    pub async fn fetch_journals(&self, nlm_ids: &[String]) -> Result<Vec<Journal>> {
        if nlm_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut resolved = Vec::with_capacity(nlm_ids.len());
        for id in nlm_ids {
            if id.chars().any(|c| c.is_ascii_alphabetic()) {
                match self.resolve_odd_journal_id(id).await {
                    Ok(new_id) => resolved.push(new_id),
                    Err(e @ EntrezError::AmbiguousJournalId { .. }) => {
                        warn!(journal_id = %id, error = %e, "Skipping unresolvable journal id");
                    }
                    Err(e) => return Err(e),
                }
            } else {
                resolved.push(id.clone());
            }
        }

        let options = self
            .config()
            .request_options(Verb::Fetch, Database::NlmCatalog);
        let fetcher = RecordFetcher::new(self.transport());
        let journals = fetcher.fetch(&resolved, &options, parse_journals).await?;

        info!(
            requested = nlm_ids.len(),
            fetched = journals.len(),
            "Journals fetched"
        );

        Ok(journals)
    }

    /// Look up full-text provider links for the given PMIDs.
    ///
    /// Returns a mapping from PMID to its links, in provider order. PMIDs
    /// with no links are absent from the mapping; look them up with
    /// `map.get(id).cloned().unwrap_or_default()`.
    #[instrument(skip(self), fields(pmids_count = pmids.len()))]
    pub async fn fetch_full_text_links(
        &self,
        pmids: &[String],
    ) -> Result<HashMap<String, Vec<FullTextLink>>> {
        if pmids.is_empty() {
            return Ok(HashMap::new());
        }

        let options = self.config().request_options(Verb::Link, Database::Pubmed);
        let extra = match &options.extra {
            Some(fragment) => format!("dbfrom=pubmed&cmd=prlinks&{}", fragment),
            None => "dbfrom=pubmed&cmd=prlinks".to_string(),
        };
        let options = options.with_extra(extra);

        let fetcher = RecordFetcher::new(self.transport());
        let pairs = fetcher.fetch(pmids, &options, parse_links).await?;

        let mut links: HashMap<String, Vec<FullTextLink>> = HashMap::new();
        for (pmid, mut set) in pairs {
            links.entry(pmid).or_default().append(&mut set);
        }

        info!(
            requested = pmids.len(),
            with_links = links.len(),
            "Full-text links fetched"
        );

        Ok(links)
    }
}
