//! Terminal color support for CLI output.
//!
//! Diagnostics are styled only when stderr is an interactive terminal, so
//! piped or redirected output stays plain. The capture report itself is
//! printed unstyled to keep its lines byte-stable for scripting.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Check if stderr is a terminal (interactive mode).
fn is_stderr_interactive() -> bool {
    std::io::stderr().is_terminal()
}

/// Style for error messages.
pub fn error(msg: &str) -> String {
    if is_stderr_interactive() {
        format!("{} {}", "error:".red().bold(), msg)
    } else {
        format!("error: {}", msg)
    }
}

/// Style for warning messages.
pub fn warning(msg: &str) -> String {
    if is_stderr_interactive() {
        format!("{} {}", "warning:".yellow().bold(), msg)
    } else {
        format!("warning: {}", msg)
    }
}
