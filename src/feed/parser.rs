use chrono::{DateTime, Utc};
use feed_rs::parser;

/// Raw items retained per feed, in document order. Bounds downstream work
/// no matter how large a feed decides to be.
pub const MAX_ITEMS_PER_FEED: usize = 10;

/// A single entry lifted out of a syndication document, before
/// normalization fills in the gaps.
#[derive(Debug, Clone)]
pub struct RawFeedItem {
    pub title: String,
    pub link: String,
    /// `None` when the entry carries no date or feed-rs could not parse it.
    pub published: Option<DateTime<Utc>>,
    /// Per-item author/attribution, when the feed provides one.
    pub author: Option<String>,
}

/// Parse output: the feed-level title plus up to [`MAX_ITEMS_PER_FEED`] items.
#[derive(Debug, Default)]
pub struct ParsedFeed {
    /// Channel/feed title, used as the attribution fallback downstream.
    pub title: Option<String>,
    pub items: Vec<RawFeedItem>,
}

/// Best-effort parse of an RSS/Atom/RDF payload.
///
/// A payload feed-rs cannot make sense of yields an empty `ParsedFeed`
/// rather than an error — one malformed feed must never take down a batch.
/// Entries missing a title or a link are discarded here; a missing or
/// unparseable date is fine (the item survives with `published: None`).
pub fn parse_feed(bytes: &[u8]) -> ParsedFeed {
    let feed = match parser::parse(bytes) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable feed payload, skipping");
            return ParsedFeed::default();
        }
    };

    let title = feed
        .title
        .map(|t| t.content)
        .filter(|t| !t.trim().is_empty());

    let items = feed
        .entries
        .into_iter()
        .take(MAX_ITEMS_PER_FEED)
        .filter_map(|entry| {
            let title = entry.title.map(|t| t.content)?;
            let link = entry.links.first().map(|l| l.href.clone())?;
            if title.trim().is_empty() || link.trim().is_empty() {
                return None;
            }

            let published = entry.published.or(entry.updated);
            let author = entry
                .authors
                .into_iter()
                .next()
                .map(|a| a.name)
                .filter(|n| !n.trim().is_empty());

            Some(RawFeedItem {
                title,
                link,
                published,
                author,
            })
        })
        .collect();

    ParsedFeed { title, items }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_TWO_ITEMS: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
    <title>Example Wire</title>
    <item>
        <title>First headline</title>
        <link>https://example.com/1</link>
        <pubDate>Tue, 01 Jul 2025 10:00:00 GMT</pubDate>
        <author>Jane Reporter</author>
    </item>
    <item>
        <title>Second headline</title>
        <link>https://example.com/2</link>
    </item>
</channel></rss>"#;

    #[test]
    fn test_parse_rss_items_and_feed_title() {
        let parsed = parse_feed(RSS_TWO_ITEMS.as_bytes());
        assert_eq!(parsed.title.as_deref(), Some("Example Wire"));
        assert_eq!(parsed.items.len(), 2);

        let first = &parsed.items[0];
        assert_eq!(first.title, "First headline");
        assert_eq!(first.link, "https://example.com/1");
        assert!(first.published.is_some());
        assert_eq!(first.author.as_deref(), Some("Jane Reporter"));

        let second = &parsed.items[1];
        assert!(second.published.is_none());
        assert!(second.author.is_none());
    }

    #[test]
    fn test_parse_atom() {
        let atom = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom">
    <title>Atom Outlet</title>
    <id>urn:feed</id>
    <updated>2025-07-01T09:00:00Z</updated>
    <entry>
        <title>Atom headline</title>
        <id>urn:1</id>
        <link href="https://example.org/a"/>
        <updated>2025-07-01T09:00:00Z</updated>
    </entry>
</feed>"#;

        let parsed = parse_feed(atom.as_bytes());
        assert_eq!(parsed.title.as_deref(), Some("Atom Outlet"));
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].link, "https://example.org/a");
        // No <published>, so the entry's <updated> stands in
        assert!(parsed.items[0].published.is_some());
    }

    #[test]
    fn test_malformed_payload_yields_empty() {
        let parsed = parse_feed(b"<not really xml");
        assert!(parsed.title.is_none());
        assert!(parsed.items.is_empty());

        let parsed = parse_feed(b"");
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_items_without_link_discarded() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
    <title>Example Wire</title>
    <item><title>No link here</title></item>
    <item><title>Kept</title><link>https://example.com/kept</link></item>
</channel></rss>"#;

        let parsed = parse_feed(rss.as_bytes());
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].title, "Kept");
    }

    #[test]
    fn test_item_cap() {
        let mut rss = String::from(
            r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Big Feed</title>"#,
        );
        for i in 0..25 {
            rss.push_str(&format!(
                "<item><title>Item {i}</title><link>https://example.com/{i}</link></item>"
            ));
        }
        rss.push_str("</channel></rss>");

        let parsed = parse_feed(rss.as_bytes());
        assert_eq!(parsed.items.len(), MAX_ITEMS_PER_FEED);
        // Document order preserved
        assert_eq!(parsed.items[0].title, "Item 0");
        assert_eq!(parsed.items[9].title, "Item 9");
    }

    #[test]
    fn test_missing_feed_title_is_none() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
    <item><title>Orphan</title><link>https://example.com/o</link></item>
</channel></rss>"#;

        let parsed = parse_feed(rss.as_bytes());
        assert!(parsed.title.is_none());
        assert_eq!(parsed.items.len(), 1);
    }
}
