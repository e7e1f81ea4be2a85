//! In-memory keyword index.
//!
//! Every search is a linear scan. For each stored keyword the index works
//! out the largest edit distance that could still satisfy the threshold,
//! skips the keyword when the length difference alone exceeds it, and
//! otherwise runs the bounded Levenshtein with that limit.
//!
//! # Concurrency
//!
//! `add` takes `&mut self` and `search` takes `&self`, so the borrow checker
//! already rules out a search overlapping an insert. Once loading is done
//! the index can be shared (for example behind an `Arc`) and searched from
//! any number of threads. There is no internal locking.

use crate::distance::levenshtein_bounded;
use crate::error::{Result, SearchError};
use crate::normalize::MatchOptions;
use crate::results::{SearchResult, SearchResults};
use tracing::debug;

/// Added to the percentage slack before flooring so that values such as
/// `10 * (100 - 90) / 100` are not truncated to the integer below.
/// The final `percentage >= threshold` check keeps results exact.
const SLACK_EPSILON: f64 = 1e-9;

/// Minimum index size before [`StringMatcher::par_search`] uses rayon.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 2048;

/// How close a keyword has to be to the probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Minimum similarity in percent.
    ///
    /// Values outside `[0, 100]` are ordinary filters: below zero every
    /// keyword passes, above 100 none does.
    Percentage(f64),
    /// Maximum number of edits. Percentages are still reported for ranking.
    EditDistance(usize),
}

impl Threshold {
    /// Largest distance that can pass when the longer of probe and keyword
    /// has `max_len` characters. `None` means nothing can pass.
    pub fn allowed_distance(&self, max_len: usize) -> Option<usize> {
        match *self {
            Threshold::EditDistance(max) => Some(max.min(max_len)),
            Threshold::Percentage(percentage) => {
                let slack = max_len as f64 * (100.0 - percentage) / 100.0;
                // Also rejects NaN
                if !(slack >= 0.0) {
                    return None;
                }
                let allowed = (slack + SLACK_EPSILON).floor();
                if allowed >= max_len as f64 {
                    Some(max_len)
                } else {
                    Some(allowed as usize)
                }
            }
        }
    }

    fn accepts(&self, percentage: f64) -> bool {
        match *self {
            Threshold::Percentage(min) => percentage >= min,
            Threshold::EditDistance(_) => true,
        }
    }
}

impl From<f64> for Threshold {
    fn from(percentage: f64) -> Self {
        Threshold::Percentage(percentage)
    }
}

impl From<usize> for Threshold {
    fn from(max_edits: usize) -> Self {
        Threshold::EditDistance(max_edits)
    }
}

/// Similarity of two sequences whose longer side has `max_len` elements.
pub fn match_percentage(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 100.0;
    }
    let same = max_len.saturating_sub(distance);
    same as f64 * 100.0 / max_len as f64
}

#[derive(Debug, Clone)]
struct Entry<V> {
    keyword: String,
    normalized: Vec<char>,
    value: V,
}

/// What happened to one stored keyword during a scan.
enum Candidate<'a, V> {
    /// Length difference alone exceeds the allowed distance
    Pruned,
    /// Bounded distance gave up, or the percentage fell short
    Rejected,
    Matched(SearchResult<'a, V>),
}

/// Approximate keyword lookup.
///
/// # Example
///
/// ```
/// use fastmatch_search::{StringMatcher, Threshold};
///
/// let mut matcher = StringMatcher::new();
/// matcher.add("Cat", 1).unwrap();
/// matcher.add("Bats", 2).unwrap();
///
/// let results = matcher.search("Fat", Threshold::EditDistance(2));
/// assert_eq!(results.keywords(), vec!["Cat", "Bats"]);
/// ```
#[derive(Debug, Clone)]
pub struct StringMatcher<V> {
    entries: Vec<Entry<V>>,
    options: MatchOptions,
}

impl<V> Default for StringMatcher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> StringMatcher<V> {
    /// Empty index comparing keywords exactly as given.
    pub fn new() -> Self {
        Self::with_options(MatchOptions::None)
    }

    /// Empty index with the given normalization.
    pub fn with_options(options: MatchOptions) -> Self {
        Self::with_capacity(options, 0)
    }

    /// Empty index with room for `capacity` keywords.
    pub fn with_capacity(options: MatchOptions, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            options,
        }
    }

    /// Normalization applied to keywords and probes.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Number of stored keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keyword has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keywords in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    /// Store `keyword` with its associated value.
    ///
    /// Duplicates are allowed and each one is returned by matching searches.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidArgument`] when the keyword is empty after
    /// normalization. The index is unchanged in that case.
    pub fn add(&mut self, keyword: impl Into<String>, value: V) -> Result<()> {
        let keyword = keyword.into();
        let normalized = self.options.normalize(&keyword);
        if normalized.is_empty() {
            return Err(SearchError::empty_keyword(&keyword));
        }

        self.entries.push(Entry {
            keyword,
            normalized,
            value,
        });
        Ok(())
    }

    /// Add every `(keyword, value)` pair, stopping at the first invalid one.
    ///
    /// Pairs before the failing one stay in the index. Returns the number added.
    pub fn add_all<I, K>(&mut self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        let mut added = 0;
        for (keyword, value) in items {
            self.add(keyword, value).map_err(|SearchError::InvalidArgument(msg)| {
                SearchError::InvalidArgument(format!("item {}: {msg}", added + 1))
            })?;
            added += 1;
        }
        Ok(added)
    }

    /// Keywords similar to `probe`, best first.
    pub fn search(&self, probe: &str, threshold: impl Into<Threshold>) -> SearchResults<'_, V> {
        let threshold = threshold.into();
        let probe = self.options.normalize(probe);
        let candidates = self
            .entries
            .iter()
            .map(|entry| score(entry, &probe, threshold));
        self.rank(probe.len(), threshold, candidates)
    }

    /// Keywords at least `percentage` percent similar to `probe`.
    pub fn search_percentage(&self, probe: &str, percentage: f64) -> SearchResults<'_, V> {
        self.search(probe, Threshold::Percentage(percentage))
    }

    /// Keywords within `max_edits` edits of `probe`.
    pub fn search_distance(&self, probe: &str, max_edits: usize) -> SearchResults<'_, V> {
        self.search(probe, Threshold::EditDistance(max_edits))
    }

    fn rank<'a>(
        &'a self,
        probe_len: usize,
        threshold: Threshold,
        candidates: impl IntoIterator<Item = Candidate<'a, V>>,
    ) -> SearchResults<'a, V> {
        let mut pruned = 0usize;
        let mut rejected = 0usize;
        let mut matches = Vec::new();

        for candidate in candidates {
            match candidate {
                Candidate::Pruned => pruned += 1,
                Candidate::Rejected => rejected += 1,
                Candidate::Matched(result) => matches.push(result),
            }
        }

        debug!(
            probe_len,
            ?threshold,
            entries = self.entries.len(),
            pruned,
            rejected,
            matched = matches.len(),
            "keyword search complete"
        );

        SearchResults::ranked(matches)
    }
}

#[cfg(feature = "parallel")]
impl<V: Sync> StringMatcher<V> {
    /// Same results as [`search`](Self::search), scanning with rayon once
    /// the index holds at least [`PARALLEL_THRESHOLD`] keywords.
    pub fn par_search(&self, probe: &str, threshold: impl Into<Threshold>) -> SearchResults<'_, V> {
        use rayon::prelude::*;

        if self.entries.len() < PARALLEL_THRESHOLD {
            return self.search(probe, threshold);
        }

        let threshold = threshold.into();
        let probe = self.options.normalize(probe);
        // Indexed collect keeps insertion order, so ties rank as in `search`
        let candidates: Vec<Candidate<'_, V>> = self
            .entries
            .par_iter()
            .map(|entry| score(entry, &probe, threshold))
            .collect();
        self.rank(probe.len(), threshold, candidates)
    }
}

fn score<'a, V>(entry: &'a Entry<V>, probe: &[char], threshold: Threshold) -> Candidate<'a, V> {
    let keyword = &entry.normalized;
    let max_len = probe.len().max(keyword.len());

    let Some(allowed) = threshold.allowed_distance(max_len) else {
        return Candidate::Pruned;
    };
    if probe.len().abs_diff(keyword.len()) > allowed {
        return Candidate::Pruned;
    }

    let Some(distance) = levenshtein_bounded(probe, keyword, allowed) else {
        return Candidate::Rejected;
    };
    let percentage = match_percentage(distance, max_len);
    if !threshold.accepts(percentage) {
        return Candidate::Rejected;
    }

    Candidate::Matched(SearchResult {
        keyword: &entry.keyword,
        value: &entry.value,
        percentage,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_distance_percentage() {
        assert_eq!(Threshold::Percentage(75.0).allowed_distance(10), Some(2));
        assert_eq!(Threshold::Percentage(50.0).allowed_distance(10), Some(5));
        assert_eq!(Threshold::Percentage(25.0).allowed_distance(10), Some(7));
        assert_eq!(Threshold::Percentage(100.0).allowed_distance(10), Some(0));
        assert_eq!(Threshold::Percentage(0.0).allowed_distance(10), Some(10));
    }

    #[test]
    fn test_allowed_distance_does_not_truncate_exact_values() {
        // 10 * (1 - 0.9) is 0.999... in naive floating point
        assert_eq!(Threshold::Percentage(90.0).allowed_distance(10), Some(1));
        assert_eq!(Threshold::Percentage(70.0).allowed_distance(10), Some(3));
    }

    #[test]
    fn test_allowed_distance_out_of_range() {
        assert_eq!(Threshold::Percentage(-50.0).allowed_distance(4), Some(4));
        assert_eq!(Threshold::Percentage(f64::NEG_INFINITY).allowed_distance(4), Some(4));
        assert_eq!(Threshold::Percentage(100.5).allowed_distance(4), None);
        assert_eq!(Threshold::Percentage(f64::NAN).allowed_distance(4), None);
    }

    #[test]
    fn test_allowed_distance_edit_distance() {
        assert_eq!(Threshold::EditDistance(2).allowed_distance(10), Some(2));
        assert_eq!(Threshold::EditDistance(usize::MAX).allowed_distance(3), Some(3));
    }

    #[test]
    fn test_match_percentage() {
        assert_eq!(match_percentage(0, 5), 100.0);
        assert_eq!(match_percentage(2, 4), 50.0);
        assert_eq!(match_percentage(1, 10), 90.0);
        assert_eq!(match_percentage(0, 0), 100.0);
        assert_eq!(match_percentage(3, 3), 0.0);
    }

    #[test]
    fn test_threshold_from() {
        assert_eq!(Threshold::from(80.0), Threshold::Percentage(80.0));
        assert_eq!(Threshold::from(3usize), Threshold::EditDistance(3));
    }

    #[test]
    fn test_add_rejects_empty() {
        let mut matcher = StringMatcher::new();
        let err = matcher.add("", 1).unwrap_err();
        assert!(matches!(err, SearchError::InvalidArgument(_)));
        assert!(matcher.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_when_stripping() {
        let mut matcher = StringMatcher::with_options(MatchOptions::RemoveSpacingAndLinebreaks);
        assert!(matcher.add(" \t\n", 1).is_err());
        assert!(matcher.is_empty());

        // Without stripping, whitespace is an ordinary keyword
        let mut plain = StringMatcher::new();
        assert!(plain.add(" ", 1).is_ok());
    }

    #[test]
    fn test_add_all_reports_position() {
        let mut matcher = StringMatcher::new();
        let err = matcher
            .add_all(vec![("one", 1), ("two", 2), ("", 3), ("four", 4)])
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid argument: item 3: keyword must not be empty");
        assert_eq!(matcher.keywords().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_empty_probe() {
        let mut matcher = StringMatcher::new();
        matcher.add("ab", ()).unwrap();

        assert!(matcher.search("", Threshold::Percentage(1.0)).is_empty());
        let results = matcher.search("", Threshold::EditDistance(2));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].percentage, 0.0);
    }

    #[test]
    fn test_duplicates_are_returned_independently() {
        let mut matcher = StringMatcher::new();
        matcher.add("same", 1).unwrap();
        matcher.add("same", 2).unwrap();

        let results = matcher.search("same", Threshold::Percentage(100.0));
        let values: Vec<i32> = results.iter().map(|r| *r.value).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_search_on_empty_index() {
        let matcher: StringMatcher<()> = StringMatcher::default();
        assert!(matcher.search("anything", Threshold::Percentage(0.0)).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_search_matches_sequential() {
        let mut matcher = StringMatcher::new();
        for i in 0..(PARALLEL_THRESHOLD + 100) {
            matcher.add(format!("key{}", i % 500), i).unwrap();
        }

        let sequential = matcher.search("key42", Threshold::EditDistance(1));
        let parallel = matcher.par_search("key42", Threshold::EditDistance(1));

        let seq: Vec<(&str, usize)> = sequential.iter().map(|r| (r.keyword, *r.value)).collect();
        let par: Vec<(&str, usize)> = parallel.iter().map(|r| (r.keyword, *r.value)).collect();
        assert!(!seq.is_empty());
        assert_eq!(seq, par);
    }
}
