//! Configuration type definitions

use super::loader;

/// Host alias used when nothing overrides it
pub const DEFAULT_TARGET_HOST: &str = "debian";
/// Remote directory used when nothing overrides it
pub const DEFAULT_TARGET_DIR: &str = "~/xdp-test";

/// Where the build files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub host: String,
    pub dir: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_TARGET_HOST.to_string(),
            dir: DEFAULT_TARGET_DIR.to_string(),
        }
    }
}

/// Programs used for remote copy and remote exec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub scp: String,
    pub ssh: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            scp: "scp".to_string(),
            ssh: "ssh".to_string(),
        }
    }
}

/// Values supplied on the command line (highest priority)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub target: Option<String>,
    pub target_dir: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub target: TargetConfig,
    pub transport: TransportConfig,
}

impl Config {
    /// Resolve defaults, then environment, then CLI flags
    pub fn load(cli: &CliOverrides) -> Self {
        loader::with_cli_overrides(loader::with_env_overrides(Config::default()), cli)
    }
}
