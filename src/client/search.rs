//! Search orchestration: one throttled request, plus paged continuations
//! when the caller asked for the complete id list.

use tracing::{debug, info, instrument};

use super::EntrezClient;
use crate::error::Result;
use crate::models::SearchResult;
use crate::options::{RequestOptions, Verb};
use crate::parser::parse_search;
use crate::template::{expand_uri, URI_TEMPLATE};

impl EntrezClient {
    /// Search the selected database for `term`.
    ///
    /// Issues one request; when `options.load_all_pmids` is set and the
    /// result set spans more than one page, issues continuation requests
    /// with `retstart` advanced by `retmax` until every id has been
    /// collected, appending ids in page order. Translation info
    /// (`mesh_terms`) and `phrases_not_found` are taken from the first
    /// page only.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entrez_client::EntrezClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EntrezClient::new();
    ///     let options = client.options().with_reldate(90);
    ///     let results = client.search("quantum physics", &options).await?;
    ///     println!("{} matches, {} ids on this page", results.count, results.pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, options), fields(term = %term, load_all = options.load_all_pmids))]
    pub async fn search(&self, term: &str, options: &RequestOptions) -> Result<SearchResult> {
        let mut results = self.do_search(term, options).await?;

        if options.load_all_pmids && options.retmax > 0 {
            let count = results.count as usize;
            let mut retstart = options.retmax;

            while retstart < count {
                debug!(retstart, count, "Loading continuation page");
                let page = self
                    .do_search(term, &options.clone().with_retstart(retstart))
                    .await?;
                results.pmids.extend(page.pmids);
                retstart += options.retmax;
            }
        }

        info!(
            count = results.count,
            pmids = results.pmids.len(),
            "Search completed"
        );

        Ok(results)
    }

    /// Issue a single throttled search request and parse the response.
    pub(crate) async fn do_search(
        &self,
        term: &str,
        options: &RequestOptions,
    ) -> Result<SearchResult> {
        let options = options
            .clone()
            .with_verb(Verb::Search)
            .with_query(format!("term={}", urlencoding::encode(term)));

        let url = expand_uri(URI_TEMPLATE, &options);
        let body = self.transport().execute(&url).await?;
        parse_search(&body)
    }
}
