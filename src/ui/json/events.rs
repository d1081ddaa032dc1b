//! Shared JSON event types for consistent CLI output.
//!
//! Every line written in `--json` mode is one of these structs.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub destination: &'a str,
    pub files: usize,
    pub dry_run: bool,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, destination: &'a str, files: usize, dry_run: bool) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            destination,
            files,
            dry_run,
        }
    }
}

/// Event emitted around each file copy.
#[derive(Debug, Clone, Serialize)]
pub struct CopyEvent<'a> {
    pub event: &'static str,
    pub status: &'static str,
    pub index: usize,
    pub local: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<&'a str>,
}

impl<'a> CopyEvent<'a> {
    pub fn started(index: usize, local: String, destination: &'a str) -> Self {
        Self {
            event: "copy",
            status: "started",
            index,
            local,
            destination: Some(destination),
        }
    }

    pub fn finished(index: usize, local: String) -> Self {
        Self {
            event: "copy",
            status: "done",
            index,
            local,
            destination: None,
        }
    }
}

/// Event emitted around the remote build session.
#[derive(Debug, Clone, Serialize)]
pub struct ExecEvent<'a> {
    pub event: &'static str,
    pub status: &'static str,
    pub host: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<&'a str>,
}

impl<'a> ExecEvent<'a> {
    pub fn started(host: &'a str, script: &'a str) -> Self {
        Self {
            event: "exec",
            status: "started",
            host,
            script: Some(script),
            stdout: None,
            stderr: None,
        }
    }

    pub fn finished(host: &'a str, stdout: Option<&'a str>, stderr: Option<&'a str>) -> Self {
        Self {
            event: "exec",
            status: "done",
            host,
            script: None,
            stdout,
            stderr,
        }
    }

    pub fn failed(host: &'a str, stdout: Option<&'a str>, stderr: Option<&'a str>) -> Self {
        Self {
            status: "failed",
            ..Self::finished(host, stdout, stderr)
        }
    }
}

/// Event emitted when a command completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub copied: usize,
    pub executed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str, copied: usize, executed: bool) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            copied,
            executed,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            exit_code: None,
        }
    }

    pub fn with_exit_code(mut self, exit_code: Option<i32>) -> Self {
        self.exit_code = exit_code;
        self
    }
}
