//! Relay-backed feed fetching.
//!
//! Feeds are never fetched directly: every request goes through a CORS
//! relay that retrieves the target URL on our behalf and echoes the body
//! back, either wrapped in a JSON envelope (`{"contents": "..."}`) or as a
//! raw passthrough. The relay is opaque infrastructure — we validate the
//! target, bound the wait, and take whatever 2xx payload comes back.
//!
//! No retries here. The retry policy is the next scheduled aggregation
//! cycle, not a tighter loop inside a single fetch.

use crate::util::validate_url;
use futures::StreamExt;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;

const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Sequence component of the cache-busting token. Epoch millis alone can
/// collide when several fetches start inside the same millisecond.
static CACHE_BUST_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Error)]
pub enum RelayError {
    /// Fetch exceeded the per-call timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Relay responded with a non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the size limit
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    /// Response was not valid UTF-8
    #[error("Invalid UTF-8 in relay response")]
    InvalidUtf8,
    /// Target URL failed validation before any request was made
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] crate::util::UrlValidationError),
}

/// JSON envelope returned by allorigins-style relays.
#[derive(Deserialize)]
struct RelayEnvelope {
    contents: String,
}

/// Monotonically distinct token appended to every target URL so
/// intermediate caches cannot serve a stale document.
fn cache_buster() -> String {
    let seq = CACHE_BUST_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}

/// Fetches one feed through the relay.
///
/// The target URL is validated, given a fresh `cb` query parameter, and
/// handed to the relay's `/get` endpoint. The whole call (send + body
/// read) is bounded by `timeout_secs` so one unresponsive source cannot
/// stall a batch past that bound.
///
/// Returns the raw feed payload; parsing happens elsewhere.
pub async fn fetch_via_relay(
    client: &reqwest::Client,
    relay_base: &str,
    feed_url: &str,
    timeout_secs: u64,
) -> Result<String, RelayError> {
    let mut target = validate_url(feed_url)?;
    target.query_pairs_mut().append_pair("cb", &cache_buster());

    let relay_url = format!("{}/get", relay_base.trim_end_matches('/'));
    let request = client.get(&relay_url).query(&[("url", target.as_str())]);

    let body = tokio::time::timeout(Duration::from_secs(timeout_secs), async {
        let response = request.send().await.map_err(RelayError::Network)?;
        if !response.status().is_success() {
            return Err(RelayError::HttpStatus(response.status().as_u16()));
        }
        read_limited_text(response, MAX_FEED_SIZE).await
    })
    .await
    .map_err(|_| RelayError::Timeout(timeout_secs))??;

    // Envelope first, raw passthrough second — some relays wrap, some echo.
    match serde_json::from_str::<RelayEnvelope>(&body) {
        Ok(envelope) => Ok(envelope.contents),
        Err(_) => Ok(body),
    }
}

async fn read_limited_text(
    response: reqwest::Response,
    limit: usize,
) -> Result<String, RelayError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(RelayError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(RelayError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(RelayError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    String::from_utf8(bytes).map_err(|_| RelayError::InvalidUtf8)
}
