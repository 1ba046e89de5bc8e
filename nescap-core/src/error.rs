//! Error types for capture runs.

use std::fmt;

/// Error type for a capture run.
///
/// The harness is a one-shot batch tool: nothing is retried, every failure
/// is surfaced to the caller.
#[derive(Debug)]
pub enum HarnessError {
    /// The ROM source or the run parameters are unusable; nothing was
    /// acquired before this was detected
    InvalidInput(String),
    /// The emulation environment failed during reset, step, or close
    Environment(String),
    /// A screenshot artifact could not be encoded or written
    Persistence(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            HarnessError::Environment(msg) => write!(f, "Environment error: {}", msg),
            HarnessError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl std::error::Error for HarnessError {}
