//! The feed catalog and the caller-owned enabled subset.
//!
//! The catalog is fixed at process start; which entries are switched on is
//! settings-collaborator state, resolved to a URL list and handed to the
//! aggregator fresh on every call. No network or parsing lives here.

use std::collections::HashSet;

/// One syndication outlet the aggregator knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSource {
    /// Stable identifier used by settings storage and the CLI.
    pub id: &'static str,
    /// Display name for settings panels.
    pub name: &'static str,
    /// Feed URL fetched through the relay.
    pub url: &'static str,
}

/// Every outlet the engine can aggregate, in display order.
pub const CATALOG: &[FeedSource] = &[
    FeedSource {
        id: "abc",
        name: "ABC News Australia",
        url: "https://www.abc.net.au/news/feed/51120/rss.xml",
    },
    FeedSource {
        id: "asahi",
        name: "Asahi Shimbun",
        url: "https://rss.asahi.com/rss/asahi/newsheadlines.rdf",
    },
    FeedSource {
        id: "asia_news",
        name: "Asia News",
        url: "https://asianews.network/feed/",
    },
    FeedSource {
        id: "bangkok_post",
        name: "Bangkok Post",
        url: "https://www.bangkokpost.com/rss/data/news.xml",
    },
    FeedSource {
        id: "bbc_asia",
        name: "BBC Asia",
        url: "http://feeds.bbci.co.uk/news/world/asia/rss.xml",
    },
    FeedSource {
        id: "cna",
        name: "Channel NewsAsia (CNA)",
        url: "https://www.channelnewsasia.com/api/v1/rss-outbound-feed?_format=xml",
    },
    FeedSource {
        id: "guardian_aus",
        name: "Guardian Australia",
        url: "https://www.theguardian.com/australia-news/rss",
    },
    FeedSource {
        id: "indian_express",
        name: "Indian Express",
        url: "https://indianexpress.com/feed/",
    },
    FeedSource {
        id: "island_times",
        name: "Island Times",
        url: "https://islandtimes.org/feed/",
    },
    FeedSource {
        id: "japan_times",
        name: "Japan Times",
        url: "https://www.japantimes.co.jp/feed/",
    },
    FeedSource {
        id: "scmp",
        name: "SCMP",
        url: "https://www.scmp.com/rss/91/feed",
    },
    FeedSource {
        id: "nikkei",
        name: "Nikkei Asia",
        url: "https://asia.nikkei.com/rss/feed/category/53",
    },
    // Reuters closed their public RSS; this tech feed stands in
    FeedSource {
        id: "reuters_asia",
        name: "Reuters Tech",
        url: "https://moxie.foxnews.com/google-publisher/tech.xml",
    },
    FeedSource {
        id: "thai_pbs",
        name: "Thai PBS",
        url: "https://www.thaipbs.or.th/rss/news",
    },
    FeedSource {
        id: "diplomat",
        name: "The Diplomat",
        url: "https://thediplomat.com/feed/",
    },
    FeedSource {
        id: "hindu",
        name: "The Hindu",
        url: "https://www.thehindu.com/news/international/feeder/default.rss",
    },
    FeedSource {
        id: "xinhua",
        name: "Xinhua",
        url: "http://www.xinhuanet.com/english/rss/worldrss.xml",
    },
];

/// Look up a catalog entry by id.
pub fn find_source(id: &str) -> Option<&'static FeedSource> {
    CATALOG.iter().find(|s| s.id == id)
}

/// Which catalog entries are switched on.
///
/// Pure set membership bookkeeping. Ids that don't exist in the catalog
/// are tolerated and simply resolve to nothing.
#[derive(Debug, Clone, Default)]
pub struct EnabledSources {
    ids: HashSet<String>,
}

impl EnabledSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Flip one id on or off.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Enable every catalog entry.
    pub fn enable_all(&mut self) {
        self.ids = CATALOG.iter().map(|s| s.id.to_string()).collect();
    }

    /// Disable everything.
    pub fn disable_all(&mut self) {
        self.ids.clear();
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Fetch URLs of the enabled entries, in catalog order.
    ///
    /// Catalog order (not insertion order) keeps the aggregator's
    /// prefix-of-three selection stable across calls.
    pub fn resolved_urls(&self) -> Vec<String> {
        CATALOG
            .iter()
            .filter(|s| self.ids.contains(s.id))
            .map(|s| s.url.to_string())
            .collect()
    }
}
