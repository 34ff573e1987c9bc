//! Live headline aggregation engine.
//!
//! Fetches independently-formatted syndication feeds through a CORS relay,
//! normalizes them into one canonical item shape, and produces a single
//! ranked, deduplicated, size-bounded headline list. The list is never
//! empty: per-source failures degrade to partial data, and only a
//! completely empty aggregation substitutes the canned fallback set.
//!
//! Pipeline: [`sources`] supplies enabled feed URLs → [`aggregator`] fans
//! out bounded concurrent fetches through [`feed::fetcher`] → [`feed::parser`]
//! and [`feed::normalizer`] shape the payloads → the aggregator merges,
//! ranks by recency, deduplicates by title, and caps the result →
//! [`panels`] derives per-view windows for UI consumers.

pub mod aggregator;
pub mod config;
pub mod fallback;
pub mod feed;
pub mod panels;
pub mod sources;
pub mod util;

pub use aggregator::{aggregate, MAX_HEADLINES, MAX_SOURCES_PER_CYCLE};
pub use config::Config;
pub use feed::NewsItem;
pub use panels::{fetch_social_listening, slice_for_view, ViewSlot, PANEL_WINDOW};
pub use sources::{EnabledSources, FeedSource, CATALOG};
