//! Remote Transport Port
//!
//! Abstracts the two remote capabilities a deployment consumes: copying a
//! local file into a remote directory, and running a shell script on a
//! remote host. Infrastructure provides the OpenSSH implementation; tests
//! provide recording mocks.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// How child process output is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream stdout/stderr straight to the terminal
    #[default]
    Inherit,
    /// Collect stdout/stderr into [`ExecOutput`]
    Capture,
}

/// Output collected from a remote exec session
///
/// Both fields are `None` when output was streamed instead of captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl ExecOutput {
    /// Output that went straight to the terminal
    pub fn streamed() -> Self {
        Self::default()
    }

    pub fn captured(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: Some(stdout.into()),
            stderr: Some(stderr.into()),
        }
    }
}

/// Error raised by a transport operation
#[derive(Debug, Error)]
pub enum TransportError {
    /// The local file to copy does not exist
    #[error("local file not found: {}", path.display())]
    MissingLocalFile { path: PathBuf },

    /// The transport program could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The transport program ran and exited unsuccessfully
    ///
    /// `stdout` and `stderr` are empty unless output was captured.
    #[error("{program} {}", exit_summary(*code, stderr))]
    Exit {
        program: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl TransportError {
    /// Exit code of the failed program, when it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            TransportError::Exit { code, .. } => *code,
            _ => None,
        }
    }

    /// Output the failed program produced before exiting
    pub fn output(&self) -> ExecOutput {
        match self {
            TransportError::Exit { stdout, stderr, .. }
                if !stdout.is_empty() || !stderr.is_empty() =>
            {
                ExecOutput::captured(stdout.as_str(), stderr.as_str())
            }
            _ => ExecOutput::streamed(),
        }
    }
}

fn exit_summary(code: Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    };
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, stderr)
    }
}

/// Remote copy and remote exec, as consumed by the deploy use case
pub trait RemoteTransport {
    /// Name of this transport (for progress output)
    fn name(&self) -> &'static str;

    /// Check whether the underlying programs can be spawned
    fn is_available(&self) -> bool;

    /// Copy `local` into `remote_dir` on `host`
    fn copy(&self, host: &str, local: &Path, remote_dir: &str) -> Result<(), TransportError>;

    /// Run `script` on `host` in a single session
    fn exec(&self, host: &str, script: &str) -> Result<ExecOutput, TransportError>;
}

impl<T: RemoteTransport + ?Sized> RemoteTransport for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn copy(&self, host: &str, local: &Path, remote_dir: &str) -> Result<(), TransportError> {
        (**self).copy(host, local, remote_dir)
    }

    fn exec(&self, host: &str, script: &str) -> Result<ExecOutput, TransportError> {
        (**self).exec(host, script)
    }
}
