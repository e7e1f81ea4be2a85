//! Shared utilities for the fastmatch tools
//!
//! This crate provides the application layer around `fastmatch-search`:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Keyword files**: loading line-oriented keyword lists into an index
//!
//! # Example
//!
//! ```rust,no_run
//! use fastmatch_core::{config::Config, keywords::load_matcher};
//!
//! let config = Config::load(None).expect("invalid configuration");
//! let search = &config.schema.search;
//!
//! let matcher = load_matcher("keywords.txt", search.options).expect("unreadable keyword file");
//! for result in matcher.search("colour", search.threshold()).iter() {
//!     println!("{} ({:.1}%)", result.keyword, result.percentage);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod keywords;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, LoggingConfig, SearchConfig};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::keywords::{build_matcher, load_matcher, parse_keywords, KeywordRecord};
}
