//! Fast approximate keyword lookup.
//!
//! This crate provides:
//! - Levenshtein edit distance with an early-abandoning bounded variant
//! - An in-memory index of keywords paired with arbitrary values
//! - Percentage and absolute edit-distance thresholds
//! - Optional whitespace-insensitive matching
//!
//! # Example
//!
//! ```
//! use fastmatch_search::{MatchOptions, StringMatcher};
//!
//! let mut matcher = StringMatcher::with_options(MatchOptions::RemoveSpacingAndLinebreaks);
//! matcher.add("This is a test", "sentence").unwrap();
//!
//! let results = matcher.search_percentage("This is  atest", 100.0);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].keyword, "This is a test");
//! assert_eq!(*results[0].value, "sentence");
//! ```

mod distance;
mod error;
mod index;
mod normalize;
mod results;

pub use distance::{levenshtein, levenshtein_bounded, levenshtein_distance, levenshtein_within};
pub use error::{Result, SearchError};
pub use index::{match_percentage, StringMatcher, Threshold};
pub use normalize::MatchOptions;
pub use results::{SearchResult, SearchResults};

#[cfg(feature = "parallel")]
pub use index::PARALLEL_THRESHOLD;
