//! Deploy Outcome
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use crate::domain::ports::ExecOutput;

/// What a finished (or previewed) deploy did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Files that were copied, in order
    pub copied: Vec<PathBuf>,
    /// Output of the remote session, if it ran
    pub output: Option<ExecOutput>,
    /// Wall-clock time of the run
    pub duration_ms: u64,
    /// True when nothing was sent to the remote host
    pub dry_run: bool,
}

impl DeployOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the remote build session ran
    pub fn executed(&self) -> bool {
        self.output.is_some()
    }
}
