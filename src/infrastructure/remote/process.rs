//! Child process helpers shared by the scp and ssh commands

use crate::domain::ports::{ExecOutput, OutputMode, TransportError};
use std::process::{Command, Stdio};

/// Run `cmd` to completion, mapping failures to [`TransportError`]
///
/// In `Inherit` mode the child writes straight to the terminal. In
/// `Capture` mode stdout/stderr are collected and returned.
pub(super) fn run(
    mut cmd: Command,
    program: &str,
    mode: OutputMode,
) -> Result<ExecOutput, TransportError> {
    // Allow password / host key prompts
    cmd.stdin(Stdio::inherit());

    let spawn_error = |source| TransportError::Spawn {
        program: program.to_string(),
        source,
    };

    match mode {
        OutputMode::Inherit => {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(spawn_error)?;

            if !status.success() {
                return Err(TransportError::Exit {
                    program: program.to_string(),
                    code: status.code(),
                    stdout: String::new(),
                    stderr: String::new(),
                });
            }

            Ok(ExecOutput::streamed())
        }
        OutputMode::Capture => {
            let output = cmd
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .map_err(spawn_error)?;

            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            if !output.status.success() {
                return Err(TransportError::Exit {
                    program: program.to_string(),
                    code: output.status.code(),
                    stdout,
                    stderr,
                });
            }

            Ok(ExecOutput::captured(stdout, stderr))
        }
    }
}

/// Check whether `program` can be spawned at all
///
/// Some programs (scp) exit non-zero without arguments, so only the spawn
/// result matters.
pub(super) fn can_spawn(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
