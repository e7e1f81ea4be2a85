//! Distance command - edit distance between two strings

use anyhow::Result;
use fastmatch_core::error::exit_codes;
use fastmatch_search::{levenshtein_bounded, match_percentage, MatchOptions};
use serde_json::json;

/// Run the distance command
pub fn run(a: &str, b: &str, max: Option<usize>, options: MatchOptions, json: bool) -> Result<i32> {
    let a_chars = options.normalize(a);
    let b_chars = options.normalize(b);
    let max_len = a_chars.len().max(b_chars.len());

    // Without a bound nothing can be abandoned, so the result is always Some
    let bound = max.unwrap_or(usize::MAX);
    let distance = levenshtein_bounded(&a_chars, &b_chars, bound);
    tracing::debug!(a_len = a_chars.len(), b_len = b_chars.len(), ?max, ?distance, "Distance computed");

    if json {
        let output = json!({
            "distance": distance,
            "similarity": distance.map(|d| match_percentage(d, max_len)),
            "max": max,
            "options": options,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match distance {
            Some(d) => {
                println!("distance: {}", d);
                println!("similarity: {:.1}%", match_percentage(d, max_len));
            }
            None => println!("distance: more than {}", bound),
        }
    }

    Ok(if distance.is_some() { exit_codes::SUCCESS } else { exit_codes::NO_MATCH })
}
