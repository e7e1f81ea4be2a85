//! Ranked search results.

use serde::Serialize;
use std::ops::Index;

/// A single match borrowed from the index.
#[derive(Debug, PartialEq, Serialize)]
pub struct SearchResult<'a, V> {
    /// Stored keyword exactly as it was added
    pub keyword: &'a str,
    /// Value associated with the keyword
    pub value: &'a V,
    /// Similarity in `[0, 100]`
    pub percentage: f64,
    /// Edit distance between the normalized probe and keyword
    pub distance: usize,
}

impl<V> Clone for SearchResult<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for SearchResult<'_, V> {}

/// Matches ordered by descending percentage.
///
/// Equal percentages keep the order in which the keywords were added.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SearchResults<'a, V> {
    results: Vec<SearchResult<'a, V>>,
}

impl<'a, V> SearchResults<'a, V> {
    /// Sort `results` into ranking order.
    pub(crate) fn ranked(mut results: Vec<SearchResult<'a, V>>) -> Self {
        // sort_by is stable, so ties stay in insertion order
        results.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { results }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Match at `index` in ranking order.
    pub fn get(&self, index: usize) -> Option<&SearchResult<'a, V>> {
        self.results.get(index)
    }

    /// Highest ranked match.
    pub fn best(&self) -> Option<&SearchResult<'a, V>> {
        self.results.first()
    }

    /// True when any match carries exactly this stored keyword.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.find_keyword(keyword).is_some()
    }

    /// First (best ranked) match carrying this stored keyword.
    pub fn find_keyword(&self, keyword: &str) -> Option<&SearchResult<'a, V>> {
        self.results.iter().find(|r| r.keyword == keyword)
    }

    /// Iterate over matches in ranking order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult<'a, V>> {
        self.results.iter()
    }

    /// Keep only the `limit` best matches.
    pub fn truncate(&mut self, limit: usize) {
        self.results.truncate(limit);
    }

    /// Stored keywords in ranking order.
    pub fn keywords(&self) -> Vec<&'a str> {
        self.results.iter().map(|r| r.keyword).collect()
    }
}

impl<V> Clone for SearchResults<'_, V> {
    fn clone(&self) -> Self {
        Self { results: self.results.clone() }
    }
}

impl<'a, V> Index<usize> for SearchResults<'a, V> {
    type Output = SearchResult<'a, V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.results[index]
    }
}

impl<'a, V> IntoIterator for SearchResults<'a, V> {
    type Item = SearchResult<'a, V>;
    type IntoIter = std::vec::IntoIter<SearchResult<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'r, 'a, V> IntoIterator for &'r SearchResults<'a, V> {
    type Item = &'r SearchResult<'a, V>;
    type IntoIter = std::slice::Iter<'r, SearchResult<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
