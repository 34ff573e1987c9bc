//! The canonical headline model and the mapping into it.
//!
//! Everything feed-specific (optional authors, missing dates, absent feed
//! titles) is resolved here, so the aggregator and every panel can sort
//! and render items without null checks.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed::parser::RawFeedItem;

/// Attribution used when neither the entry nor the feed provides one.
pub const GENERIC_SOURCE: &str = "Global News";

/// A fully-populated headline. Title and link are non-empty, the
/// timestamp and source are always present.
///
/// Serializes with camelCase keys (`publishedAt`), matching what the
/// dashboard panels already consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
}

/// Maps a raw entry into the canonical shape.
///
/// Source resolution order: per-item author, then the feed-level title,
/// then [`GENERIC_SOURCE`]. A missing publish time becomes `now` so the
/// item still participates in recency ranking. Items whose trimmed title
/// or link comes out empty are dropped.
pub fn normalize(
    raw: RawFeedItem,
    feed_title: Option<&str>,
    now: DateTime<Utc>,
) -> Option<NewsItem> {
    let title = raw.title.trim().to_string();
    let link = raw.link.trim().to_string();
    if title.is_empty() || link.is_empty() {
        return None;
    }

    let source = raw
        .author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .or_else(|| feed_title.map(str::trim).filter(|t| !t.is_empty()))
        .unwrap_or(GENERIC_SOURCE)
        .to_string();

    Some(NewsItem {
        title,
        link,
        published_at: raw.published.unwrap_or(now),
        source,
    })
}
