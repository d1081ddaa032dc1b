//! End-to-end deploy runs against fake scp/ssh binaries.

#![cfg(unix)]

mod common;

use common::{assert_in_order, stderr, stdout, FakeRemote, MAKEFILE, SOURCE};

#[test]
fn deploy_copies_both_files_then_builds_once() {
    let remote = FakeRemote::new();

    let output = remote.run(&[]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(
        remote.scp_calls(),
        vec![
            "scp ./Makefile debian:~/xdp-test/".to_string(),
            "scp xdp_copy_tail_call.c debian:~/xdp-test/".to_string(),
        ]
    );

    let ssh = remote.ssh_calls();
    assert_eq!(ssh.len(), 1, "log:\n{}", remote.log());
    assert_eq!(ssh[0].host, "debian");
    assert_in_order(
        &ssh[0].script,
        &["cd ~/xdp-test\n", "make clean\n", "make\n", "echo \"All done\""],
    );
}

#[test]
fn copies_are_logged_before_the_remote_session() {
    let remote = FakeRemote::new();

    remote.run(&[]);

    assert_in_order(
        &remote.log(),
        &[
            "scp ./Makefile",
            "scp xdp_copy_tail_call.c",
            "ssh debian",
        ],
    );
}

#[test]
fn stdout_ends_with_remote_completion_marker() {
    let remote = FakeRemote::new();

    let output = remote.run(&[]);

    let out = stdout(&output);
    assert_eq!(out.lines().last(), Some("All done"), "stdout:\n{}", out);
    // Progress goes to stderr and never claims completion itself.
    assert!(!stderr(&output).contains("All done"));
}

#[test]
fn missing_source_file_fails_before_remote_session() {
    let remote = FakeRemote::new();
    remote.remove_source(SOURCE);

    let output = remote.run(&[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(remote.scp_calls().len(), 1);
    assert!(remote.ssh_calls().is_empty());
    assert!(stderr(&output).contains("local file not found: xdp_copy_tail_call.c"));
}

#[test]
fn missing_makefile_fails_before_any_copy() {
    let remote = FakeRemote::new();
    remote.remove_source(MAKEFILE);

    let output = remote.run(&[]);

    assert!(!output.status.success());
    assert!(remote.log().is_empty(), "log:\n{}", remote.log());
    assert!(stderr(&output).contains("failed to copy ./Makefile"));
}

#[test]
fn scp_failure_propagates_exit_code_and_skips_build() {
    let remote = FakeRemote::new();

    let output = remote.command().env("FAKE_SCP_EXIT", "1").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(remote.scp_calls().len(), 1);
    assert!(remote.ssh_calls().is_empty());
}

#[test]
fn remote_build_failure_propagates_exit_code() {
    let remote = FakeRemote::new();

    let output = remote.command().env("FAKE_SSH_EXIT", "2").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!stdout(&output).contains("All done"));
    assert!(!stderr(&output).contains("All done"));

    let err = stderr(&output);
    assert!(err.contains("remote build on 'debian' failed"), "stderr:\n{}", err);
    assert_eq!(remote.ssh_calls().len(), 1);
}

#[test]
fn running_twice_issues_the_same_calls() {
    let remote = FakeRemote::new();

    assert!(remote.run(&[]).status.success());
    let first = remote.log();
    assert!(remote.run(&[]).status.success());
    let both = remote.log();

    assert_eq!(both, format!("{}{}", first, first));
}

#[test]
fn target_flags_override_defaults() {
    let remote = FakeRemote::new();

    let output = remote.run(&["--target", "lab", "--target-dir", "/srv/xdp"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(
        remote.scp_calls(),
        vec![
            "scp ./Makefile lab:/srv/xdp/".to_string(),
            "scp xdp_copy_tail_call.c lab:/srv/xdp/".to_string(),
        ]
    );
    let ssh = remote.ssh_calls();
    assert_eq!(ssh[0].host, "lab");
    assert!(ssh[0].script.contains("cd /srv/xdp\n"));
}

#[test]
fn environment_overrides_target_and_flags_win() {
    let remote = FakeRemote::new();

    let output = remote
        .command()
        .env("XDP_SYNC_TARGET", "env-host")
        .env("XDP_SYNC_TARGET_DIR", "~/from-env")
        .args(["--target", "flag-host"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(
        remote.scp_calls()[0],
        "scp ./Makefile flag-host:~/from-env/"
    );
    assert_eq!(remote.ssh_calls()[0].host, "flag-host");
}

#[test]
fn progress_lines_name_each_step() {
    let remote = FakeRemote::new();

    let output = remote.run(&[]);

    assert_in_order(
        &stderr(&output),
        &[
            "Deploying 2 file(s) to debian:~/xdp-test/",
            "scp ./Makefile debian:~/xdp-test/",
            "scp xdp_copy_tail_call.c debian:~/xdp-test/",
            "ssh debian",
        ],
    );
}
