//! xdp-sync CLI - copy the XDP test program to a remote host and rebuild it
//!
//! Usage: xdp-sync [--target HOST] [--target-dir DIR] [--dry-run] [--json]
//!
//! With no arguments: `scp` Makefile and xdp_copy_tail_call.c to
//! `debian:~/xdp-test/`, then `ssh debian` to run `make clean` and `make`.

mod commands;
mod ui;

use clap::Parser;
use xdp_sync::presentation::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::deploy::cmd_deploy(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(ui::error::exit_code(&err));
    }
}
