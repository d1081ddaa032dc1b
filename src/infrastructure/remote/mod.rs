//! OpenSSH Remote Transport
//!
//! Implements `RemoteTransport` with the system `scp` and `ssh` binaries.
//! Host aliases, keys and ports come from the user's SSH client config.

mod process;
mod scp;
mod ssh;

pub use scp::ScpCopy;
pub use ssh::SshExec;

use crate::config::TransportConfig;
use crate::domain::ports::{ExecOutput, OutputMode, RemoteTransport, TransportError};
use std::path::Path;

/// Remote transport backed by OpenSSH client programs
#[derive(Debug, Clone)]
pub struct OpenSshTransport {
    scp: ScpCopy,
    ssh: SshExec,
    mode: OutputMode,
}

impl OpenSshTransport {
    pub fn new(config: &TransportConfig) -> Self {
        Self {
            scp: ScpCopy::new(&config.scp),
            ssh: SshExec::new(&config.ssh),
            mode: OutputMode::Inherit,
        }
    }

    /// Stream or capture child output
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pass `-v` through to scp
    pub fn with_verbose_copy(mut self, verbose: bool) -> Self {
        self.scp = self.scp.verbose(verbose);
        self
    }

    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    pub fn scp_program(&self) -> &str {
        self.scp.program()
    }

    pub fn ssh_program(&self) -> &str {
        self.ssh.program()
    }
}

impl Default for OpenSshTransport {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}

impl RemoteTransport for OpenSshTransport {
    fn name(&self) -> &'static str {
        "openssh"
    }

    fn is_available(&self) -> bool {
        self.scp.check_available() && self.ssh.check_available()
    }

    fn copy(&self, host: &str, local: &Path, remote_dir: &str) -> Result<(), TransportError> {
        self.scp.copy(host, local, remote_dir, self.mode)
    }

    fn exec(&self, host: &str, script: &str) -> Result<ExecOutput, TransportError> {
        self.ssh.exec(host, script, self.mode)
    }
}
