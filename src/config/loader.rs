//! Configuration resolution
//!
//! There is no configuration file. Values come from built-in defaults,
//! `XDP_SYNC_*` environment variables, then CLI flags.

use super::types::{CliOverrides, Config};

/// Apply environment variable overrides (XDP_SYNC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let get = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    // XDP_SYNC_TARGET
    if let Some(host) = get("XDP_SYNC_TARGET") {
        config.target.host = host;
    }

    // XDP_SYNC_TARGET_DIR
    if let Some(dir) = get("XDP_SYNC_TARGET_DIR") {
        config.target.dir = dir;
    }

    // XDP_SYNC_SCP / XDP_SYNC_SSH
    if let Some(scp) = get("XDP_SYNC_SCP") {
        config.transport.scp = scp;
    }
    if let Some(ssh) = get("XDP_SYNC_SSH") {
        config.transport.ssh = ssh;
    }

    config
}

/// Apply command-line overrides
pub fn with_cli_overrides(mut config: Config, cli: &CliOverrides) -> Config {
    if let Some(host) = cli.target.as_ref().filter(|v| !v.trim().is_empty()) {
        config.target.host = host.clone();
    }
    if let Some(dir) = cli.target_dir.as_ref().filter(|v| !v.trim().is_empty()) {
        config.target.dir = dir.clone();
    }
    config
}
