//! Rate limiting for eUtils API compliance.
//!
//! The upstream service's rate policy is the binding constraint on this
//! crate: every outbound request, including pagination continuations and
//! chunked sub-requests, waits for the limiter first. The limiter enforces a
//! flat minimum delay between consecutive requests; there is no jitter and
//! no adaptive backoff.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, instrument};

/// Minimum delay between requests when no interval is configured.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(500);

/// Enforces a minimum interval between outbound requests.
///
/// The only state is the timestamp reserved for the most recent request,
/// owned by the limiter and shared between clones of the handle. Nothing is
/// ambient or global, so tests can construct a limiter with any interval
/// they like.
#[derive(Clone)]
pub struct RateLimiter {
    interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter with the given minimum inter-request interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a limiter with the default eUtils-safe interval (500 ms).
    pub fn eutils_default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// The configured minimum interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the minimum interval since the previous request has
    /// passed, then claim the new request slot.
    ///
    /// The slot is reserved under the lock before sleeping, so concurrent
    /// callers serialize cleanly: each caller gets its own slot at least one
    /// interval after the previous one.
    #[instrument(skip(self))]
    pub async fn throttle(&self) {
        let slot = {
            let mut last = self.last_request.lock().await;
            let now = Instant::now();
            let slot = match *last {
                Some(previous) => now.max(previous + self.interval),
                None => now,
            };
            *last = Some(slot);
            slot
        };

        let now = Instant::now();
        if slot > now {
            debug!(wait_ms = (slot - now).as_millis() as u64, "Waiting for request slot");
            sleep_until(slot).await;
        } else {
            debug!("Request slot available immediately");
        }
    }
}
