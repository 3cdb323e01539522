//! Ordering and fuzzy filtering for directory entries.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::fs::entry::Entry;

/// The order in which a listing is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Byte-wise by name, as stored on disk.
    #[default]
    ByName,
    /// Most recently modified first.
    ByModTime,
}

impl Order {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            Order::ByName => Order::ByModTime,
            Order::ByModTime => Order::ByName,
        }
    }

    /// Key the render layer uses to pick an indicator glyph or label.
    pub fn indicator_key(self) -> &'static str {
        match self {
            Order::ByName => "name",
            Order::ByModTime => "time",
        }
    }
}

/// Sorts `entries` by `order` and returns them.
///
/// Names are compared byte-wise with no case folding or locale collation.
/// `ByModTime` puts the newest entry first; equal times fall back to name
/// order and entries without a readable time go last.
pub fn sort_entries(mut entries: Vec<Entry>, order: Order) -> Vec<Entry> {
    entries.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));

    if order == Order::ByModTime {
        // Stable, so ties keep the name order from above.
        entries.sort_by(|a, b| b.modified().cmp(&a.modified()));
    }

    entries
}

/// Case- and accent-insensitive form of `s`: NFD, combining marks dropped,
/// lowercased.
pub fn normalized_fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Keeps the entries whose full path fuzzy-matches `query`.
///
/// A path matches when the characters of `query` appear in it in order,
/// ignoring case and diacritics. The result keeps listing order: match
/// quality never reorders entries. An empty or all-whitespace query returns
/// every entry.
pub fn fuzzy_filter(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.trim().is_empty() {
        return entries.to_vec();
    }

    let matcher = SkimMatcherV2::default().respect_case();
    let pattern = normalized_fold(query);

    entries
        .iter()
        .filter(|e| {
            let candidate = normalized_fold(&e.path().to_string_lossy());
            matcher.fuzzy_match(&candidate, &pattern).is_some()
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::node::PathNode;
    use std::time::{Duration, SystemTime};

    fn entry(path: &str) -> Entry {
        Entry::new(PathNode::local(path), None, None)
    }

    fn timed(path: &str, secs: Option<u64>) -> Entry {
        let modified = secs.map(|s| SystemTime::UNIX_EPOCH + Duration::from_secs(s));
        Entry::new(PathNode::local(path), None, modified)
    }

    fn paths(entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.path().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn order_toggles_both_ways() {
        assert_eq!(Order::ByName.toggled(), Order::ByModTime);
        assert_eq!(Order::ByModTime.toggled(), Order::ByName);
        assert_eq!(Order::default(), Order::ByName);
    }

    #[test]
    fn indicator_keys() {
        assert_eq!(Order::ByName.indicator_key(), "name");
        assert_eq!(Order::ByModTime.indicator_key(), "time");
    }

    #[test]
    fn sort_by_name() {
        let sorted = sort_entries(vec![entry("c"), entry("a"), entry("b")], Order::ByName);
        assert_eq!(paths(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_by_mod_time_descending() {
        let sorted = sort_entries(
            vec![timed("t3", Some(10)), timed("t1", Some(30)), timed("t2", Some(20))],
            Order::ByModTime,
        );
        assert_eq!(paths(&sorted), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn unreadable_mod_time_sorts_last() {
        let sorted = sort_entries(
            vec![timed("unknown", None), timed("old", Some(1)), timed("new", Some(2))],
            Order::ByModTime,
        );
        assert_eq!(paths(&sorted), vec!["new", "old", "unknown"]);
    }

    #[test]
    fn equal_mod_times_keep_set() {
        let sorted = sort_entries(
            vec![timed("b", Some(5)), timed("a", Some(5)), timed("c", Some(9))],
            Order::ByModTime,
        );
        assert_eq!(paths(&sorted)[0], "c");
        let mut rest = paths(&sorted)[1..].to_vec();
        rest.sort();
        assert_eq!(rest, vec!["a", "b"]);
    }

    #[test]
    fn fold_strips_case_and_accents() {
        assert_eq!(normalized_fold("Crème Brûlée"), "creme brulee");
        assert_eq!(normalized_fold("ÅNGSTRÖM"), "angstrom");
    }

    #[test]
    fn empty_query_returns_everything() {
        let entries = vec![entry("bar"), entry("baz"), entry("foo")];
        assert_eq!(fuzzy_filter(&entries, ""), entries);
    }

    #[test]
    fn whitespace_query_returns_everything() {
        let entries = vec![entry("bar"), entry("foo")];
        assert_eq!(fuzzy_filter(&entries, "   "), entries);
    }

    #[test]
    fn subsequence_match_keeps_listing_order() {
        let entries = vec![entry("bar"), entry("baz"), entry("foo")];
        assert_eq!(paths(&fuzzy_filter(&entries, "ba")), vec!["bar", "baz"]);
        assert_eq!(paths(&fuzzy_filter(&entries, "br")), vec!["bar"]);
    }

    #[test]
    fn match_is_not_reordered_by_score() {
        let entries = vec![entry("xaxxb"), entry("ab")];
        assert_eq!(paths(&fuzzy_filter(&entries, "ab")), vec!["xaxxb", "ab"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let entries = vec![entry("Documents"), entry("music")];
        assert_eq!(paths(&fuzzy_filter(&entries, "DOC")), vec!["Documents"]);
    }

    #[test]
    fn match_ignores_diacritics() {
        let entries = vec![entry("café"), entry("tea")];
        assert_eq!(paths(&fuzzy_filter(&entries, "cafe")), vec!["café"]);
        assert_eq!(paths(&fuzzy_filter(&entries, "CAFÉ")), vec!["café"]);
    }

    #[test]
    fn match_uses_full_path() {
        let entries = vec![entry("/projects/alpha"), entry("/music/beta")];
        assert_eq!(paths(&fuzzy_filter(&entries, "prj")), vec!["/projects/alpha"]);
    }

    #[test]
    fn no_match_is_empty() {
        let entries = vec![entry("bar"), entry("baz")];
        assert!(fuzzy_filter(&entries, "zzz").is_empty());
    }
}
