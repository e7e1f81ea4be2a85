//! fastmatch: approximate keyword lookup from the command line.

use clap::{Parser, Subcommand};
use fastmatch_cli::output::Status;
use fastmatch_core::{config::Config, error::exit_codes};
use fastmatch_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Approximate keyword lookup
#[derive(Parser)]
#[command(name = "fastmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a configuration file (defaults to .fastmatch.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a keyword file for entries similar to a probe
    Search {
        /// Keyword file: one `keyword` or `keyword<TAB>value` per line
        file: PathBuf,

        /// Text to look up
        probe: String,

        /// Minimum similarity in percent
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "distance")]
        percent: Option<f64>,

        /// Maximum edit distance
        #[arg(short, long)]
        distance: Option<usize>,

        /// Ignore spaces, tabs and line breaks when comparing
        #[arg(short = 'w', long)]
        ignore_whitespace: bool,

        /// Maximum results to print (0 for all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the edit distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Give up once the distance is known to exceed this bound
        #[arg(short, long)]
        max: Option<usize>,

        /// Ignore spaces, tabs and line breaks when comparing
        #[arg(short = 'w', long)]
        ignore_whitespace: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            return exit_code(e.exit_code());
        }
    };

    let logging = &config.schema.logging;
    let telemetry = TelemetryConfig {
        log_level: logging.level.clone(),
        show_target: logging.show_target,
        json: logging.json,
    }
    .verbose(cli.verbose);
    if let Err(e) = fastmatch_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {}", e));
    }
    tracing::debug!(config = ?config.path, "Configuration loaded");

    let json_output = matches!(
        cli.command,
        Commands::Search { json: true, .. } | Commands::Distance { json: true, .. }
    );

    let search_config = &config.schema.search;
    let result = match cli.command {
        Commands::Search { file, probe, percent, distance, ignore_whitespace, limit, json } => {
            commands::search::run(
                commands::search::SearchArgs {
                    file,
                    probe,
                    percent,
                    distance,
                    ignore_whitespace,
                    limit,
                    json,
                },
                search_config,
            )
        }

        Commands::Distance { a, b, max, ignore_whitespace, json } => {
            let options = commands::resolve_options(ignore_whitespace, search_config.options);
            commands::distance::run(&a, &b, max, options, json)
        }
    };

    match result {
        Ok(code) => exit_code(code),
        Err(e) => match e.downcast_ref::<fastmatch_core::Error>() {
            Some(err) if json_output => {
                match serde_json::to_string_pretty(&err.to_report()) {
                    Ok(report) => println!("{}", report),
                    Err(_) => Status::error(&err.to_string()),
                }
                exit_code(err.exit_code())
            }
            Some(err) => {
                Status::error(&err.to_string());
                exit_code(err.exit_code())
            }
            None => {
                Status::error(&format!("{:#}", e));
                exit_code(exit_codes::FAILURE)
            }
        },
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
