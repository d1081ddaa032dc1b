//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Running with no arguments deploys to the built-in target. Every flag is
//! optional.

use clap::Parser;

use crate::config::CliOverrides;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// xdp-sync - copy the XDP test program to a remote host and rebuild it
#[derive(Parser, Debug)]
#[command(name = "xdp-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events (for CI)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Remote host alias [default: debian]
    #[arg(long, value_name = "HOST", value_parser = non_blank)]
    pub target: Option<String>,

    /// Remote directory [default: ~/xdp-test]
    #[arg(long, value_name = "DIR", value_parser = non_blank)]
    pub target_dir: Option<String>,

    /// Show the copies and the remote script without running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Reject empty or whitespace-only values instead of falling back to defaults
fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("value must not be empty".to_string());
    }
    Ok(value.to_string())
}

impl Cli {
    /// Target settings given on the command line
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            target: self.target.clone(),
            target_dir: self.target_dir.clone(),
        }
    }
}
