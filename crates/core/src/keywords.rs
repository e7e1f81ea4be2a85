//! Keyword file loading
//!
//! One entry per line, either `keyword` or `keyword<TAB>value`. Blank lines
//! and lines starting with `#` are ignored. Without an explicit value the
//! 1-based line number is used.

use crate::error::{Error, Result, ResultExt};
use fastmatch_search::{MatchOptions, SearchError, StringMatcher};
use std::path::Path;

/// A keyword line read from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRecord {
    /// 1-based line number
    pub line: usize,
    pub keyword: String,
    pub value: String,
}

/// Parse keyword records from file contents
pub fn parse_keywords(content: &str) -> Vec<KeywordRecord> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| {
            let line_no = idx + 1;
            match line.split_once('\t') {
                Some((keyword, value)) => KeywordRecord {
                    line: line_no,
                    keyword: keyword.to_string(),
                    value: value.to_string(),
                },
                None => KeywordRecord {
                    line: line_no,
                    keyword: line.to_string(),
                    value: line_no.to_string(),
                },
            }
        })
        .collect()
}

/// Build an index from keyword file contents
pub fn build_matcher(content: &str, options: MatchOptions) -> Result<StringMatcher<String>> {
    let records = parse_keywords(content);
    let mut matcher = StringMatcher::with_capacity(options, records.len());

    for record in records {
        matcher
            .add(record.keyword, record.value)
            .map_err(|SearchError::InvalidArgument(msg)| Error::invalid_keyword(record.line, msg))?;
    }

    Ok(matcher)
}

/// Read a keyword file and build an index from it
pub fn load_matcher(path: impl AsRef<Path>, options: MatchOptions) -> Result<StringMatcher<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    build_matcher(&content, options)
        .with_suggestion(format!("Fix or remove the offending line in {}", path.display()))
}
