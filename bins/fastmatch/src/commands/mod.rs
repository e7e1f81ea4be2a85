//! Command implementations

pub mod distance;
pub mod search;

use fastmatch_search::MatchOptions;

/// `--ignore-whitespace` wins over the configured option
pub fn resolve_options(ignore_whitespace: bool, configured: MatchOptions) -> MatchOptions {
    if ignore_whitespace {
        MatchOptions::RemoveSpacingAndLinebreaks
    } else {
        configured
    }
}
