//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use super::remote_transport::ExecOutput;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        destination: String,
        file_count: usize,
        dry_run: bool,
    },

    /// A file copy is about to run (or would run, in a dry run)
    CopyStarted {
        index: usize,
        local: PathBuf,
        destination: String,
    },

    /// A file copy finished successfully
    CopyFinished { index: usize, local: PathBuf },

    /// The remote session is about to run (or would run, in a dry run)
    ExecStarted { host: String, script: String },

    /// The remote session exited successfully
    ExecFinished { host: String, output: ExecOutput },

    /// The remote session exited unsuccessfully; `output` holds whatever
    /// was captured before it stopped
    ExecFailed { host: String, output: ExecOutput },

    /// Every step finished
    Completed {
        copied: usize,
        executed: bool,
        duration_ms: u64,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - console sink: progress lines on stderr
/// - JSON sink: NDJSON event stream on stdout
/// - [`NoopEventSink`]: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
