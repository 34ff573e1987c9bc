//! The orchestration core: fan out bounded concurrent fetches, fan in one
//! ranked, deduplicated, capped headline list.
//!
//! `aggregate` is a pure function of its inputs plus wall-clock time — it
//! holds no state across calls, so overlapping cycles (timer + manual
//! refresh) cannot interfere with each other.

use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;

use crate::config::Config;
use crate::fallback::fallback_headlines;
use crate::feed::{fetch_via_relay, normalize, parse_feed, NewsItem, ParsedFeed};
use crate::util::dedup_key;

/// Sources contacted per cycle. Third-party relays rate-limit aggressively,
/// so the selection is a stable prefix of the input list, never a sample.
pub const MAX_SOURCES_PER_CYCLE: usize = 3;

/// Upper bound on the returned list.
pub const MAX_HEADLINES: usize = 15;

/// Feeds used when the caller supplies no enabled sources, so the pipeline
/// always has work even before any settings exist.
const DEFAULT_FEED_URLS: &[&str] = &[
    "http://feeds.bbci.co.uk/news/world/asia/rss.xml",
    "https://www.bangkokpost.com/rss/data/news.xml",
    "https://asia.nikkei.com/rss/feed/category/53",
];

/// Runs one aggregation cycle over the given feed URLs.
///
/// Always returns between 1 and [`MAX_HEADLINES`] items, never an error:
/// per-source failures degrade to partial data, and only a completely
/// empty merge substitutes the static fallback set. An empty `source_urls`
/// falls back to a default set of three well-known feeds.
pub async fn aggregate(
    client: &reqwest::Client,
    config: &Config,
    source_urls: &[String],
) -> Vec<NewsItem> {
    let urls: Vec<&str> = if source_urls.is_empty() {
        DEFAULT_FEED_URLS.to_vec()
    } else {
        source_urls.iter().map(String::as_str).collect()
    };

    let subset = &urls[..urls.len().min(MAX_SOURCES_PER_CYCLE)];

    // Fan-out/fan-in with no shared mutable state: each branch returns its
    // own list, merged only after the join. `buffered` (not unordered)
    // keeps per-source results in source-list order, so equal timestamps
    // tie-break deterministically in the stable sort below.
    let per_source: Vec<Vec<NewsItem>> = stream::iter(subset.iter().copied())
        .map(|url| fetch_source(client, config, url))
        .buffered(MAX_SOURCES_PER_CYCLE)
        .collect()
        .await;

    let merged: Vec<NewsItem> = per_source.into_iter().flatten().collect();
    let total = merged.len();
    let ranked = rank_dedup_cap(merged);

    if ranked.is_empty() {
        tracing::warn!(
            sources = subset.len(),
            "Aggregation produced no items, serving fallback headlines"
        );
        return fallback_headlines(Utc::now());
    }

    tracing::debug!(
        sources = subset.len(),
        merged = total,
        kept = ranked.len(),
        "Aggregation cycle complete"
    );
    ranked
}

/// Fetch, parse and normalize a single source.
///
/// Every failure mode — relay error, timeout, malformed document —
/// collapses to an empty list, indistinguishable downstream from a feed
/// that simply had nothing to offer.
async fn fetch_source(client: &reqwest::Client, config: &Config, url: &str) -> Vec<NewsItem> {
    let payload =
        match fetch_via_relay(client, &config.relay_url, url, config.fetch_timeout_secs).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(source = %url, error = %e, "Feed fetch failed");
                return Vec::new();
            }
        };

    let ParsedFeed { title, items } = parse_feed(payload.as_bytes());
    let now = Utc::now();
    items
        .into_iter()
        .filter_map(|raw| normalize(raw, title.as_deref(), now))
        .collect()
}

/// Rank by recency, drop duplicate stories, cap the list.
///
/// Pure over its input. The sort is stable, so items with equal timestamps
/// keep their merge (source-list) order; the first occurrence of a title
/// wins the dedup walk, which after ranking means the most recent one.
pub fn rank_dedup_cap(mut items: Vec<NewsItem>) -> Vec<NewsItem> {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(dedup_key(&item.title)));

    items.truncate(MAX_HEADLINES);
    items
}
