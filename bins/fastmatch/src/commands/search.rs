//! Search command - look up a probe in a keyword file

use anyhow::Result;
use fastmatch_cli::output::{format_count, format_duration, print_match, Status};
use fastmatch_cli::progress;
use fastmatch_core::config::SearchConfig;
use fastmatch_core::error::exit_codes;
use fastmatch_core::keywords::load_matcher;
use fastmatch_search::Threshold;
use fastmatch_telemetry::timed_span;
use serde_json::json;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments of the `search` subcommand
pub struct SearchArgs {
    pub file: PathBuf,
    pub probe: String,
    pub percent: Option<f64>,
    pub distance: Option<usize>,
    pub ignore_whitespace: bool,
    pub limit: Option<usize>,
    pub json: bool,
}

/// Flags override the configured threshold
fn resolve_threshold(args: &SearchArgs, config: &SearchConfig) -> Threshold {
    match (args.percent, args.distance) {
        (_, Some(max)) => Threshold::EditDistance(max),
        (Some(percent), None) => Threshold::Percentage(percent),
        (None, None) => config.threshold(),
    }
}

fn describe(threshold: Threshold) -> String {
    match threshold {
        Threshold::Percentage(p) => format!("at least {}% similar", p),
        Threshold::EditDistance(d) => format!("within {} edits", d),
    }
}

/// Run the search command
pub fn run(args: SearchArgs, config: &SearchConfig) -> Result<i32> {
    let options = super::resolve_options(args.ignore_whitespace, config.options);
    let threshold = resolve_threshold(&args, config);
    let limit = args.limit.unwrap_or(config.limit);

    let started = Instant::now();
    let spinner = (!args.json).then(|| progress::spinner("Loading keywords..."));
    let loaded = {
        timed_span!("load_keywords", path = %args.file.display());
        load_matcher(&args.file, options)
    };
    let matcher = match loaded {
        Ok(matcher) => {
            if let Some(pb) = &spinner {
                progress::finish_success(
                    pb,
                    &format!(
                        "Loaded {} in {}",
                        format_count(matcher.len(), "keyword", "keywords"),
                        format_duration(started.elapsed())
                    ),
                );
            }
            matcher
        }
        Err(e) => {
            if let Some(pb) = &spinner {
                progress::finish_error(pb, "Failed to load keywords");
            }
            return Err(e.into());
        }
    };

    let mut results = {
        timed_span!("search", probe = %args.probe, ?threshold);
        matcher.par_search(&args.probe, threshold)
    };
    if limit > 0 {
        results.truncate(limit);
    }

    if args.json {
        let threshold_json = match threshold {
            Threshold::Percentage(p) => json!({ "percentage": p }),
            Threshold::EditDistance(d) => json!({ "max_distance": d }),
        };
        let output = json!({
            "probe": args.probe,
            "options": options,
            "threshold": threshold_json,
            "matches": results,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if results.is_empty() {
        Status::warning(&format!("No keywords {} to {:?}", describe(threshold), args.probe));
    } else {
        Status::header(&format!(
            "{} {} to {:?}",
            format_count(results.len(), "keyword", "keywords"),
            describe(threshold),
            args.probe
        ));
        for (rank, result) in results.iter().enumerate() {
            print_match(rank + 1, result.keyword, result.percentage, result.distance, result.value);
        }
    }

    Ok(if results.is_empty() { exit_codes::NO_MATCH } else { exit_codes::SUCCESS })
}
