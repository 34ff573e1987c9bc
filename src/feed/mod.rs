//! Feed retrieval and shaping.
//!
//! Three stages, each blind to the others' quirks:
//!
//! - [`fetcher`] - one bounded fetch per feed through the CORS relay
//! - [`parser`] - best-effort RSS/Atom/RDF parsing via `feed-rs`
//! - [`normalizer`] - raw entries into fully-populated [`NewsItem`]s
//!
//! The aggregator composes them; nothing in here knows about merging,
//! ranking, or fallbacks.

mod fetcher;
mod normalizer;
mod parser;

pub use fetcher::{fetch_via_relay, RelayError};
pub use normalizer::{normalize, NewsItem, GENERIC_SOURCE};
pub use parser::{parse_feed, ParsedFeed, RawFeedItem, MAX_ITEMS_PER_FEED};
