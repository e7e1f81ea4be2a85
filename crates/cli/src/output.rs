//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::{OwoColorize, Stream};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Print one ranked match
///
/// Colors are only emitted when stdout supports them.
pub fn print_match(rank: usize, keyword: &str, percentage: f64, distance: usize, value: &str) {
    let score = format_percentage(percentage);
    let score = if percentage >= 100.0 {
        score.if_supports_color(Stream::Stdout, |s| s.green()).to_string()
    } else if percentage >= 75.0 {
        score.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string()
    } else {
        score.to_string()
    };
    let keyword = escape_keyword(keyword);
    let distance = format!("d={}", distance);

    println!(
        "{:>3}. {:>7}  {}  {} {}",
        rank,
        score,
        keyword.if_supports_color(Stream::Stdout, |s| s.bold()),
        distance.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        value.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
}

/// Format a match percentage for display
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Make tabs and line breaks inside a keyword visible
pub fn escape_keyword(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&c.escape_unicode().to_string()),
            c => out.push(c),
        }
    }
    out
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
