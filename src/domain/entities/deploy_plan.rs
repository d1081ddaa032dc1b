//! DeployPlan entity - everything one deploy run will do
//!
//! A plan is built once from configuration and then either executed or
//! previewed. It owns the ordered file list, the target and the script.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::services::RemoteScript;
use crate::domain::value_objects::Target;

/// Local build files copied on every run, in copy order
pub const DEPLOY_FILES: [&str; 2] = ["./Makefile", "xdp_copy_tail_call.c"];

/// A single file copy: local path and `host:dir/` destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStep {
    pub local: PathBuf,
    pub destination: String,
}

/// Complete description of one deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    target: Target,
    files: Vec<PathBuf>,
    script: RemoteScript,
}

impl DeployPlan {
    /// Create a plan that copies `files` to `target` and runs a clean build there
    pub fn new(target: Target, files: Vec<PathBuf>) -> Self {
        let script = RemoteScript::clean_build(target.dir());
        Self {
            target,
            files,
            script,
        }
    }

    /// Plan for the configured target with the standard file set
    pub fn from_config(config: &Config) -> Self {
        let target = Target::new(&config.target.host, &config.target.dir);
        let files = DEPLOY_FILES.iter().map(PathBuf::from).collect();
        Self::new(target, files)
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn script(&self) -> &RemoteScript {
        &self.script
    }

    /// Copy steps in execution order
    pub fn copy_steps(&self) -> Vec<CopyStep> {
        let destination = self.target.remote_spec();
        self.files
            .iter()
            .map(|local| CopyStep {
                local: local.clone(),
                destination: destination.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_copies_makefile_then_source() {
        let plan = DeployPlan::from_config(&Config::default());
        let steps = plan.copy_steps();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].local, PathBuf::from("./Makefile"));
        assert_eq!(steps[1].local, PathBuf::from("xdp_copy_tail_call.c"));
        assert!(steps.iter().all(|s| s.destination == "debian:~/xdp-test/"));
    }

    #[test]
    fn plan_script_changes_into_target_dir() {
        let plan = DeployPlan::new(Target::new("lab", "/opt/xdp"), vec![]);
        assert!(plan.script().as_str().contains("cd /opt/xdp\n"));
        assert!(plan.copy_steps().is_empty());
    }

    #[test]
    fn plan_uses_configured_target() {
        let mut config = Config::default();
        config.target.host = "builder".to_string();
        config.target.dir = "~/work".to_string();

        let plan = DeployPlan::from_config(&config);
        assert_eq!(plan.target().host(), "builder");
        assert_eq!(plan.target().remote_spec(), "builder:~/work/");
        assert_eq!(plan.files().len(), DEPLOY_FILES.len());
    }
}
