//! Configuration module for xdp-sync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (XDP_SYNC_*)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_cli_overrides, with_env_overrides};
pub use types::{
    CliOverrides, Config, TargetConfig, TransportConfig, DEFAULT_TARGET_DIR, DEFAULT_TARGET_HOST,
};
