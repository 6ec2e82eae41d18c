//! # UI Utilities
//!
//! Shared terminal output helpers. Results go to stdout, one per line;
//! status messages and diagnostics go to stderr.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;

/// Prints a success message with a file path.
///
/// Format: `✓ {message}: {path}`
pub fn print_success(message: &str, path: &Path) {
    eprintln!("{} {}: {}", "✓".green(), message, path.display());
}

/// Prints an informational note with a file path.
pub fn print_note(message: &str, path: &Path) {
    eprintln!("{} {}: {}", "•".dimmed(), message, path.display());
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

/// Formats a validation verdict for `cpn check`.
pub fn verdict(code: &str, valid: bool) -> String {
    if valid {
        format!("{code}: valid")
    } else {
        format!("{code}: invalid")
    }
}
