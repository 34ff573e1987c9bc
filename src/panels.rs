//! Per-panel views over one shared aggregation.
//!
//! Panels that want a distinct-looking list get a fixed window into the
//! ranked result instead of issuing redundant fetches. The social
//! listening panel is the exception: it watches a search feed no other
//! panel uses, with its own single-source fetch.

use chrono::Utc;

use crate::config::Config;
use crate::feed::{fetch_via_relay, normalize, parse_feed, NewsItem, ParsedFeed};

/// Items shown by each panel window.
pub const PANEL_WINDOW: usize = 5;

/// Search feed watched by the social listening panel.
const SOCIAL_LISTENING_FEED_URL: &str =
    "https://news.google.com/rss/search?q=%22Digital+Economy+Promotion+Agency%22&hl=th&gl=TH&ceid=TH:th";

/// Panels that derive their list from the shared aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSlot {
    /// Top of the ranked list.
    Overview,
    /// Middle window, visibly distinct from the overview.
    Global,
    /// Tail window.
    Regional,
}

impl ViewSlot {
    fn offset(self) -> usize {
        match self {
            ViewSlot::Overview => 0,
            ViewSlot::Global => 5,
            ViewSlot::Regional => 10,
        }
    }
}

/// A window of up to [`PANEL_WINDOW`] items at the slot's offset.
///
/// The slice aliases the underlying aggregation unchanged — same items,
/// same order. Offsets past the end of a short list yield an empty slice
/// rather than panicking.
pub fn slice_for_view(items: &[NewsItem], slot: ViewSlot) -> &[NewsItem] {
    let start = slot.offset().min(items.len());
    let end = (start + PANEL_WINDOW).min(items.len());
    &items[start..end]
}

/// Fetches the social listening panel's feed.
///
/// Single source, so no merge or dedup: relay fetch, tolerant parse,
/// normalize, cap at [`PANEL_WINDOW`]. Failure yields an empty list and a
/// warning — this panel has no fallback set.
pub async fn fetch_social_listening(client: &reqwest::Client, config: &Config) -> Vec<NewsItem> {
    let payload = match fetch_via_relay(
        client,
        &config.relay_url,
        SOCIAL_LISTENING_FEED_URL,
        config.fetch_timeout_secs,
    )
    .await
    {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Social listening fetch failed");
            return Vec::new();
        }
    };

    let ParsedFeed { title, items } = parse_feed(payload.as_bytes());
    let now = Utc::now();
    items
        .into_iter()
        .filter_map(|raw| normalize(raw, title.as_deref(), now))
        .take(PANEL_WINDOW)
        .collect()
}
