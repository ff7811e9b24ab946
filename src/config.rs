//! Client configuration.

use std::time::Duration;

use crate::options::{
    Database, RequestOptions, Verb, DEFAULT_BASE_URL, DEFAULT_RELDATE, DEFAULT_RETMAX,
};
use crate::rate_limit::{RateLimiter, DEFAULT_MIN_INTERVAL};

/// Configuration for an [`EntrezClient`](crate::EntrezClient).
///
/// Uses a builder pattern:
///
/// ```
/// use entrez_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_tool("my-literature-sync")
///     .with_email("researcher@university.edu");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    tool: Option<String>,
    email: Option<String>,
    api_key: Option<String>,
    rate_interval: Duration,
    /// HTTP request timeout applied to the underlying client.
    pub timeout: Duration,
    retmax: usize,
    reldate: u32,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: None,
            tool: None,
            email: None,
            api_key: None,
            rate_interval: DEFAULT_MIN_INTERVAL,
            timeout: Duration::from_secs(30),
            retmax: DEFAULT_RETMAX,
            reldate: DEFAULT_RELDATE,
        }
    }

    /// Override the API base URL (scheme + host + path prefix).
    ///
    /// Mainly useful for pointing tests at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the tool name reported to the service.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Set the contact email reported to the service.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set an NCBI API key, appended to every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the minimum delay between consecutive requests.
    pub fn with_rate_interval(mut self, interval: Duration) -> Self {
        self.rate_interval = interval;
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the default page size for searches.
    pub fn with_retmax(mut self, retmax: usize) -> Self {
        self.retmax = retmax;
        self
    }

    /// Set the default recency window in days for searches.
    pub fn with_reldate(mut self, reldate: u32) -> Self {
        self.reldate = reldate;
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or("entrez-client")
    }

    pub fn effective_email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn effective_user_agent(&self) -> String {
        format!("entrez-client/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn create_rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.rate_interval)
    }

    /// Pre-escaped `api_key=...` fragment, when a key is configured.
    pub(crate) fn api_key_fragment(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|key| format!("api_key={}", urlencoding::encode(key)))
    }

    /// Build the base option set for one request against this configuration.
    pub(crate) fn request_options(&self, verb: Verb, database: Database) -> RequestOptions {
        let options = RequestOptions::new()
            .with_base(self.effective_base_url())
            .with_verb(verb)
            .with_database(database)
            .with_tool(self.effective_tool())
            .with_email(self.effective_email())
            .with_retmax(self.retmax)
            .with_reldate(self.reldate);

        match self.api_key_fragment() {
            Some(fragment) => options.with_extra(fragment),
            None => options,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
