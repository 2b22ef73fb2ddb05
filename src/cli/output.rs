//! Terminal output formatting with colors
//!
//! Helpers return styled strings rather than printing, so the shell can
//! route them through its own writer (and tests through a buffer).
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Error line (red bold "error:" prefix)
pub fn error_line(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    format!("{}: {}", "error".red().bold(), msg)
}

/// Success status (green checkmark, indented)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    format!("  {} {}", "✓".green(), msg)
}

/// Failure status (red X, indented)
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    format!("  {} {}", "✗".red(), msg)
}

/// Section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    msg.to_string().cyan().bold().to_string()
}

/// Indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    format!("  {}", msg)
}
