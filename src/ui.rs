// file: src/ui.rs
// version: 1.0.0
// guid: c4a8e2f6-7d31-4b95-a0c4-3e8f1b6d9a52

//! Terminal output and interactive prompts
//!
//! All user-facing guidance text goes through this module so the create
//! workflow reads as a sequence of styled steps. Prompts use dialoguer and
//! are bypassed entirely in non-interactive (`--yes`) mode.

use crate::{error::UvinitError, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use regex::Regex;

/// The embedded README, shown by `uvinit readme` and as the intro banner.
pub const README: &str = include_str!("../README.md");

/// Print a horizontal rule with a section title
pub fn print_rule(title: &str) {
    let width: usize = 72;
    let label = format!("── {} ", title);
    let fill = width.saturating_sub(console::measure_text_width(&label));
    println!();
    println!("{}{}", label.bold(), "─".repeat(fill));
    println!();
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg.green().bold());
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("{} {}", "⚠".yellow().bold(), msg.yellow());
}

/// Print a subdued detail line
pub fn print_subtle(msg: &str) {
    println!("{}", msg.dimmed());
}

/// Print the standard cancellation notice
pub fn print_cancelled() {
    println!();
    println!("{}", "Cancelled. You can rerun uvinit at any time.".yellow());
}

/// Ask a yes/no question. Auto-confirmed in non-interactive mode.
pub fn confirm(prompt: &str, default: bool, auto_confirm: bool) -> Result<bool> {
    if auto_confirm {
        return Ok(default);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| UvinitError::prompt(e.to_string()))
}

/// Ask for a line of text with a default value
pub fn input(prompt: &str, default: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| UvinitError::prompt(e.to_string()))
}

/// Ask the user to pick one of `items`, returning the selected index
pub fn select(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| UvinitError::prompt(e.to_string()))
}

/// Strip HTML tags from markdown content for cleaner terminal display.
///
/// Removes HTML comments, div blocks (typically badge/image headers), img
/// tags, and badge links, then collapses the leftover blank lines.
pub fn strip_html_from_markdown(content: &str) -> String {
    // Unwraps are safe: the patterns are fixed literals.
    let comments = Regex::new(r"(?s)<!--.*?-->").unwrap();
    let divs = Regex::new(r"(?is)<div[^>]*>.*?</div>").unwrap();
    let imgs = Regex::new(r"(?i)<img[^>]*>").unwrap();
    let badges = Regex::new(r"\[!\[[^\]]*\]\([^)]*\)\]\([^)]*\)").unwrap();
    let blank_lines = Regex::new(r"\n{3,}").unwrap();

    let content = comments.replace_all(content, "");
    let content = divs.replace_all(&content, "");
    let content = imgs.replace_all(&content, "");
    let content = badges.replace_all(&content, "");
    let content = blank_lines.replace_all(&content, "\n\n");

    content.trim_start().to_string()
}

/// Render the embedded README for terminal display
pub fn readme_text() -> String {
    strip_html_from_markdown(README)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_comments() {
        let input = "before\n<!-- hidden\nstuff -->\nafter";
        let output = strip_html_from_markdown(input);
        assert!(!output.contains("hidden"));
        assert!(output.contains("before"));
        assert!(output.contains("after"));
    }

    #[test]
    fn test_strip_div_blocks() {
        let input = "# Title\n<div align=\"center\">\n<img src=\"x.png\">\n</div>\nbody";
        let output = strip_html_from_markdown(input);
        assert!(!output.contains("<div"));
        assert!(!output.contains("<img"));
        assert!(output.contains("# Title"));
        assert!(output.contains("body"));
    }

    #[test]
    fn test_strip_badge_links() {
        let input = "[![CI](https://img.shields.io/ci.svg)](https://ci.example.com)\ntext";
        let output = strip_html_from_markdown(input);
        assert!(!output.contains("shields.io"));
        assert!(output.contains("text"));
    }

    #[test]
    fn test_collapses_blank_lines_and_trims_leading() {
        let input = "\n\n\n# Title\n\n\n\n\nbody";
        let output = strip_html_from_markdown(input);
        assert!(output.starts_with("# Title"));
        assert!(output.contains("# Title\n\nbody"));
    }

    #[test]
    fn test_readme_text_is_nonempty() {
        let text = readme_text();
        assert!(!text.is_empty());
        assert!(!text.contains("<img"));
    }
}
