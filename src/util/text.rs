/// Collapses runs of whitespace (including newlines) into single spaces
/// and trims the ends.
///
/// Feed titles frequently arrive with stray CDATA padding or hard-wrapped
/// lines; collapsing keeps comparisons and display output sane.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The key under which two headlines count as the same story.
///
/// Trimmed, lowercased, inner whitespace collapsed. Deliberately an exact
/// match rather than fuzzy: re-edited or translated headlines across
/// outlets stay distinct.
pub fn dedup_key(title: &str) -> String {
    collapse_whitespace(title).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a  b\tc\n d  "), "a b c d");
        assert_eq!(collapse_whitespace("already clean"), "already clean");
        assert_eq!(collapse_whitespace("   "), "");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_dedup_key_case_insensitive() {
        assert_eq!(dedup_key("Markets Rally"), dedup_key("MARKETS RALLY"));
    }

    #[test]
    fn test_dedup_key_whitespace_insensitive() {
        assert_eq!(dedup_key("Markets  Rally "), dedup_key("Markets Rally"));
        assert_eq!(dedup_key("Markets\nRally"), dedup_key("Markets Rally"));
    }

    #[test]
    fn test_dedup_key_distinct_titles_stay_distinct() {
        assert_ne!(dedup_key("Markets Rally"), dedup_key("Markets Rallied"));
    }

    #[test]
    fn test_dedup_key_unicode() {
        // Lowercasing is Unicode-aware, not ASCII-only
        assert_eq!(dedup_key("Été Chaud"), dedup_key("été chaud"));
    }
}
