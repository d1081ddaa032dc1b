//! Error types for xdp-sync
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TransportError;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
///
/// Each variant names the step that failed and carries the transport error
/// unchanged.
#[derive(Error, Debug)]
pub enum DeployError {
    /// Copying a local file to the remote directory failed
    #[error("failed to copy {} to {destination}: {source}", local.display())]
    Copy {
        local: PathBuf,
        destination: String,
        #[source]
        source: TransportError,
    },

    /// The remote clean-and-build session failed
    #[error("remote build on '{host}' failed: {source}")]
    Exec {
        host: String,
        #[source]
        source: TransportError,
    },
}

impl DeployError {
    /// Exit code reported by the failing transport, if any
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DeployError::Copy { source, .. } | DeployError::Exec { source, .. } => {
                source.exit_code()
            }
        }
    }

    /// Short machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            DeployError::Copy { .. } => "copy_failed",
            DeployError::Exec { .. } => "exec_failed",
        }
    }
}
