//! Exit codes for the CLI.
//!
//! The harness is a one-shot batch tool whose entire purpose is producing
//! artifacts, so the contract is binary: either at least one screenshot
//! exists on disk after the run, or the run failed.

/// Exit codes for capture runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// At least one screenshot artifact exists on disk
    Success = 0,
    /// Invalid ROM source, a fatal run error, or zero artifacts produced
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitCode::Success => write!(f, "success"),
            ExitCode::Failure => write!(f, "failure"),
        }
    }
}
