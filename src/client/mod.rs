//! Client façade composing the request pipeline.

mod fetch;
mod resolve;
mod search;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::options::{Database, RequestOptions, Verb};
use crate::rate_limit::RateLimiter;
use crate::transport::Transport;

/// Client for the Entrez eUtils API.
///
/// All operations are issued strictly sequentially, each behind the rate
/// limiter, so a client is safe to use wherever the upstream rate policy
/// must hold.
#[derive(Clone)]
pub struct EntrezClient {
    transport: Transport,
    config: ClientConfig,
}

impl EntrezClient {
    /// Create a client with default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use entrez_client::EntrezClient;
    ///
    /// let client = EntrezClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use entrez_client::{ClientConfig, EntrezClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_tool("my-literature-sync")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = EntrezClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let limiter = config.create_rate_limiter();
        let http = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            transport: Transport::new(http, limiter),
            config,
        }
    }

    /// Create a client with a custom HTTP client and default configuration.
    pub fn with_client(http: Client) -> Self {
        let config = ClientConfig::new();
        let limiter = config.create_rate_limiter();
        Self {
            transport: Transport::new(http, limiter),
            config,
        }
    }

    /// Base option set for a search against the literature database,
    /// seeded from this client's configuration. Derive per-call variants
    /// through the `with_*` methods.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entrez_client::EntrezClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EntrezClient::new();
    ///     let options = client.options().with_retmax(100).with_load_all_pmids(true);
    ///     let results = client.search("mus musculus", &options).await?;
    ///     println!("{} matches", results.count);
    ///     Ok(())
    /// }
    /// ```
    pub fn options(&self) -> RequestOptions {
        self.config.request_options(Verb::Search, Database::Pubmed)
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// The rate limiter shared by every request this client makes.
    pub fn rate_limiter(&self) -> &RateLimiter {
        self.transport.limiter()
    }
}

impl Default for EntrezClient {
    fn default() -> Self {
        Self::new()
    }
}
