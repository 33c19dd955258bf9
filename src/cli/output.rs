//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: paths, commands, hints
//! - Bold: headers, important values

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ setup complete`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ template file not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run: aws sso login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a numbered step line.
///
/// Example: `1. Checking AWS credentials`
pub fn step(n: usize, msg: &str) {
    if colors_enabled() {
        println!("{} {}", style(format!("{n}.")).dim(), msg);
    } else {
        println!("{n}. {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `   account:  123456789012`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("   {} {}", style(format!("{label}:")).dim(), style(value).bold());
    } else {
        println!("   {label}: {value}");
    }
}

/// Print a blank line.
pub fn blank() {
    println!();
}
