//! Throttled HTTP dispatch.

use reqwest::Client;

use tracing::{debug, warn};

use crate::error::{EntrezError, Result};
use crate::rate_limit::RateLimiter;

/// Issues one GET at a time, each behind the rate limiter.
///
/// The transport makes no retry decisions: network failures and non-success
/// statuses propagate to the caller unchanged. Timeout policy lives on the
/// underlying HTTP client, configured at construction.
#[derive(Clone)]
pub(crate) struct Transport {
    http: Client,
    limiter: RateLimiter,
}

impl Transport {
    pub(crate) fn new(http: Client, limiter: RateLimiter) -> Self {
        Self { http, limiter }
    }

    pub(crate) fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Throttle, fetch `url`, and return the response body.
    pub(crate) async fn execute(&self, url: &str) -> Result<String> {
        self.limiter.throttle().await;

        debug!(%url, "Making API request");
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "API request failed");
            return Err(EntrezError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
