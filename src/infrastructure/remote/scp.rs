//! SCP copy command
//!
//! Copies one local file into a remote directory. Unlike rsync, scp does
//! not create the remote directory; it must already exist.

use super::process;
use crate::domain::ports::{OutputMode, TransportError};
use std::path::Path;
use std::process::Command;

/// Copy one file with scp
#[derive(Debug, Clone)]
pub struct ScpCopy {
    program: String,
    verbose: bool,
}

impl ScpCopy {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            verbose: false,
        }
    }

    /// Pass `-v` to scp
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check if scp is installed and available
    pub fn check_available(&self) -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        process::can_spawn(&self.program, &[])
    }

    /// Build the scp command line for `local` -> `host:remote_dir`
    pub fn command(&self, host: &str, local: &Path, remote_dir: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        if self.verbose {
            cmd.arg("-v");
        }
        cmd.arg(local).arg(format!("{}:{}", host, remote_dir));
        cmd
    }

    pub fn copy(
        &self,
        host: &str,
        local: &Path,
        remote_dir: &str,
        mode: OutputMode,
    ) -> Result<(), TransportError> {
        if !local.is_file() {
            return Err(TransportError::MissingLocalFile {
                path: local.to_path_buf(),
            });
        }

        process::run(self.command(host, local, remote_dir), &self.program, mode).map(|_| ())
    }
}
