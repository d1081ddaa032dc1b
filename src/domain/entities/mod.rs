//! Domain Entities
//!
//! - `DeployPlan` - the files, target and script of one deploy run

mod deploy_plan;

pub use deploy_plan::{CopyStep, DeployPlan, DEPLOY_FILES};
