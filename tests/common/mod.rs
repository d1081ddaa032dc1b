//! Test environment with fake `scp` / `ssh` binaries.
//!
//! `FakeRemote` creates a temp directory holding:
//! - `bin/` with shell-script stand-ins for scp and ssh, injected via PATH
//! - `work/` used as the working directory (where the build files live)
//! - `calls.log` where the fakes record every invocation
//!
//! The fakes never touch the network. `FAKE_SCP_EXIT` / `FAKE_SSH_EXIT`
//! make them fail with the given status.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const MAKEFILE: &str = "Makefile";
pub const SOURCE: &str = "xdp_copy_tail_call.c";

const FAKE_SCP: &str = r#"#!/bin/sh
# availability probe: scp with no arguments
[ "$#" -eq 0 ] && exit 1
echo "scp $*" >> "$FAKE_LOG"
exit "${FAKE_SCP_EXIT:-0}"
"#;

const FAKE_SSH: &str = r#"#!/bin/sh
if [ "$1" = "-V" ]; then
  echo "OpenSSH_fake" >&2
  exit 0
fi
printf 'ssh %s\n%s\n--\n' "$1" "$2" >> "$FAKE_LOG"
code="${FAKE_SSH_EXIT:-0}"
if [ "$code" -ne 0 ]; then
  echo "xdp_copy_tail_call.c:3:5: error: use of undeclared identifier 'ctx'"
  echo "make: *** [Makefile:4: all] Error $code" >&2
  exit "$code"
fi
echo "cc -O2 -target bpf -c xdp_copy_tail_call.c"
echo "All done"
"#;

/// One recorded ssh invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshCall {
    pub host: String,
    pub script: String,
}

pub struct FakeRemote {
    root: TempDir,
}

impl FakeRemote {
    /// Fake remote with both build files present in the working directory
    pub fn new() -> Self {
        let remote = Self::empty();
        remote.write_source(MAKEFILE, "all:\n\tclang -O2 -target bpf -c xdp_copy_tail_call.c\n");
        remote.write_source(SOURCE, "int xdp_prog(void *ctx) { return 2; }\n");
        remote
    }

    /// Fake remote with an empty working directory
    pub fn empty() -> Self {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::create_dir_all(root.path().join("work")).unwrap();

        install_script(&bin.join("scp"), FAKE_SCP);
        install_script(&bin.join("ssh"), FAKE_SSH);

        Self { root }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.path().join("calls.log")
    }

    pub fn write_source(&self, name: &str, content: &str) {
        fs::write(self.work_dir().join(name), content).unwrap();
    }

    pub fn remove_source(&self, name: &str) {
        fs::remove_file(self.work_dir().join(name)).unwrap();
    }

    /// Base command for the xdp-sync binary, wired to the fakes
    pub fn command(&self) -> Command {
        let bin_dir = self.root.path().join("bin");
        let original_path = std::env::var("PATH").unwrap_or_default();

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_xdp-sync"));
        cmd.current_dir(self.work_dir())
            .env("PATH", format!("{}:{}", bin_dir.display(), original_path))
            .env("FAKE_LOG", self.log_path())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("XDP_SYNC_TARGET")
            .env_remove("XDP_SYNC_TARGET_DIR")
            .env_remove("XDP_SYNC_SCP")
            .env_remove("XDP_SYNC_SSH")
            .env_remove("FAKE_SCP_EXIT")
            .env_remove("FAKE_SSH_EXIT");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    pub fn log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    pub fn scp_calls(&self) -> Vec<String> {
        self.log()
            .lines()
            .filter(|l| l.starts_with("scp "))
            .map(str::to_string)
            .collect()
    }

    pub fn ssh_calls(&self) -> Vec<SshCall> {
        let log = self.log();
        let mut calls = Vec::new();
        let mut lines = log.lines();

        while let Some(line) = lines.next() {
            let Some(host) = line.strip_prefix("ssh ") else {
                continue;
            };
            let mut script = String::new();
            for body in lines.by_ref() {
                if body == "--" {
                    break;
                }
                script.push_str(body);
                script.push('\n');
            }
            calls.push(SshCall {
                host: host.to_string(),
                script,
            });
        }

        calls
    }
}

fn install_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Assert that `needles` occur in `haystack` in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!(
                "expected '{}' after byte {} in:\n{}",
                needle, from, haystack
            ),
        }
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
