//! SSH exec command

use super::process;
use crate::domain::ports::{ExecOutput, OutputMode, TransportError};
use std::process::Command;

/// Run a script on a remote host with ssh
#[derive(Debug, Clone)]
pub struct SshExec {
    program: String,
}

impl SshExec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check if ssh is installed and available
    pub fn check_available(&self) -> bool {
        process::can_spawn(&self.program, &["-V"])
    }

    /// `ssh <host> <script>`; the remote login shell runs the script text
    pub fn command(&self, host: &str, script: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(host).arg(script);
        cmd
    }

    pub fn exec(
        &self,
        host: &str,
        script: &str,
        mode: OutputMode,
    ) -> Result<ExecOutput, TransportError> {
        process::run(self.command(host, script), &self.program, mode)
    }
}
