//! Resolution of journal identifiers that cannot be fetched directly.
//!
//! Resolution runs a secondary search against the journal catalog and
//! accepts only an exact single match. The recursion is structurally
//! bounded at depth one: resolution calls the search operation, and search
//! never calls back into resolution.

use tracing::{instrument, warn};

use super::EntrezClient;
use crate::error::{EntrezError, Result};
use crate::options::{Database, Verb};

/// Recency window for catalog searches; catalog entries can be decades old.
const RESOLVE_RELDATE: u32 = 100_000;

impl EntrezClient {
    /// Resolve a journal id that carries a non-numeric marker.
    ///
    /// Some catalog entries have ids that must be searched for rather than
    /// fetched directly. Exactly one search match resolves the id; zero or
    /// multiple matches fail with
    /// [`AmbiguousJournalId`](EntrezError::AmbiguousJournalId) rather than
    /// guessing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entrez_client::EntrezClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EntrezClient::new();
    ///     let id = client.resolve_odd_journal_id("19620690R").await?;
    ///     assert_eq!(id, "100381");
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(journal_id = %id))]
    pub async fn resolve_odd_journal_id(&self, id: &str) -> Result<String> {
        self.resolve_by_search(id, id).await
    }

    /// Resolve a journal id from its ISSN.
    ///
    /// Same exactly-one-match contract as [`resolve_odd_journal_id`],
    /// using an ISSN-filtered catalog query.
    ///
    /// [`resolve_odd_journal_id`]: EntrezClient::resolve_odd_journal_id
    #[instrument(skip(self), fields(issn = %issn))]
    pub async fn resolve_journal_id_from_issn(&self, issn: &str) -> Result<String> {
        self.resolve_by_search(&format!("{}[ISSN]", issn), issn).await
    }

    async fn resolve_by_search(&self, term: &str, input: &str) -> Result<String> {
        let options = self
            .config()
            .request_options(Verb::Search, Database::NlmCatalog)
            .with_reldate(RESOLVE_RELDATE);

        let results = self.search(term, &options).await?;

        match results.pmids.as_slice() {
            [only] => Ok(only.clone()),
            matches => {
                warn!(
                    input = %input,
                    matches = matches.len(),
                    "Journal id resolution did not produce a unique match"
                );
                Err(EntrezError::AmbiguousJournalId {
                    id: input.to_string(),
                    matches: matches.len(),
                })
            }
        }
    }
}
