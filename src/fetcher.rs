//! Chunked bulk fetching.

use tracing::{debug, info};

use crate::error::Result;
use crate::options::RequestOptions;
use crate::template::{expand_uri, URI_TEMPLATE};
use crate::transport::Transport;

/// Upper bound on ids per request; the service enforces a practical
/// URL-length/id-count ceiling.
pub(crate) const FETCH_CHUNK_SIZE: usize = 500;

/// Splits large id lists into bounded batches and issues one request per
/// batch, concatenating the parsed records in batch order.
pub(crate) struct RecordFetcher<'a> {
    transport: &'a Transport,
}

impl<'a> RecordFetcher<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Fetch all `ids` in chunks of at most [`FETCH_CHUNK_SIZE`].
    ///
    /// Each chunk becomes one `id=<comma-joined ids>` request; `parse` maps
    /// each response body to its records. Batch order is preserved, which
    /// fixes the order of the returned records. An empty chunk body
    /// contributes no records.
    pub(crate) async fn fetch<T, F>(
        &self,
        ids: &[String],
        options: &RequestOptions,
        parse: F,
    ) -> Result<Vec<T>>
    where
        F: Fn(&str) -> Result<Vec<T>>,
    {
        let mut records = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(FETCH_CHUNK_SIZE) {
            let chunk_options = options
                .clone()
                .with_query(format!("id={}", chunk.join(",")));
            let url = expand_uri(URI_TEMPLATE, &chunk_options);

            debug!(chunk_size = chunk.len(), "Fetching record batch");
            let body = self.transport.execute(&url).await?;

            if body.trim().is_empty() {
                continue;
            }

            let parsed = parse(&body)?;
            info!(
                requested = chunk.len(),
                parsed = parsed.len(),
                "Record batch fetched"
            );
            records.extend(parsed);
        }

        Ok(records)
    }
}
