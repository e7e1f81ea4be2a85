//! Keyword normalization applied before comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How keywords and probes are prepared before they are compared.
///
/// The option is fixed when the index is built and applied to every stored
/// keyword and every probe. Reported keywords are always the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchOptions {
    /// Compare keywords exactly as given
    #[default]
    None,
    /// Drop spaces, tabs and line breaks before comparing
    #[serde(alias = "ignore-whitespace")]
    RemoveSpacingAndLinebreaks,
}

impl MatchOptions {
    /// Normalize `text` into the code points used for comparison.
    pub fn normalize(&self, text: &str) -> Vec<char> {
        match self {
            MatchOptions::None => text.chars().collect(),
            MatchOptions::RemoveSpacingAndLinebreaks => {
                text.chars().filter(|&c| !is_spacing(c)).collect()
            }
        }
    }

    /// Kebab-case name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOptions::None => "none",
            MatchOptions::RemoveSpacingAndLinebreaks => "remove-spacing-and-linebreaks",
        }
    }
}

#[inline]
fn is_spacing(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

impl fmt::Display for MatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchOptions {
    type Err = crate::SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(MatchOptions::None),
            "remove-spacing-and-linebreaks" | "ignore-whitespace" => {
                Ok(MatchOptions::RemoveSpacingAndLinebreaks)
            }
            other => Err(crate::SearchError::InvalidArgument(format!(
                "unknown match option {other:?} (expected \"none\" or \"remove-spacing-and-linebreaks\")"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(chars: Vec<char>) -> String {
        chars.into_iter().collect()
    }

    #[test]
    fn test_none_keeps_everything() {
        let text = " This is\ta test\n";
        assert_eq!(collect(MatchOptions::None.normalize(text)), text);
    }

    #[test]
    fn test_remove_spacing() {
        let opts = MatchOptions::RemoveSpacingAndLinebreaks;
        assert_eq!(collect(opts.normalize("This is  atest")), "Thisisatest");
        assert_eq!(collect(opts.normalize("\t\tThis is some tabbed data")), "Thisissometabbeddata");
        assert_eq!(collect(opts.normalize("This has\r\nsome line\nbreaks.")), "Thishassomelinebreaks.");
    }

    #[test]
    fn test_remove_spacing_keeps_case_and_punctuation() {
        let opts = MatchOptions::RemoveSpacingAndLinebreaks;
        assert_eq!(collect(opts.normalize("A, b. C!")), "A,b.C!");
    }

    #[test]
    fn test_blank_normalizes_to_empty() {
        assert!(MatchOptions::RemoveSpacingAndLinebreaks.normalize(" \t\r\n").is_empty());
        assert_eq!(MatchOptions::None.normalize(" ").len(), 1);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("none".parse::<MatchOptions>().unwrap(), MatchOptions::None);
        assert_eq!(
            "Remove-Spacing-And-Linebreaks".parse::<MatchOptions>().unwrap(),
            MatchOptions::RemoveSpacingAndLinebreaks
        );
        assert_eq!(
            "ignore-whitespace".parse::<MatchOptions>().unwrap(),
            MatchOptions::RemoveSpacingAndLinebreaks
        );
        assert!("fold-case".parse::<MatchOptions>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for opts in [MatchOptions::None, MatchOptions::RemoveSpacingAndLinebreaks] {
            assert_eq!(opts.to_string().parse::<MatchOptions>().unwrap(), opts);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MatchOptions::RemoveSpacingAndLinebreaks).unwrap();
        assert_eq!(json, "\"remove-spacing-and-linebreaks\"");
        let parsed: MatchOptions = serde_json::from_str("\"ignore-whitespace\"").unwrap();
        assert_eq!(parsed, MatchOptions::RemoveSpacingAndLinebreaks);
    }
}
