//! Deploy Module
//!
//! Orchestrates the copy-then-build flow.
//!
//! ## Structure
//!
//! - `result` - Result types (`DeployOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use xdp_sync::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(OpenSshTransport::default());
//! let outcome = use_case.execute(&DeployPlan::from_config(&config))?;
//! ```

mod result;
mod use_case;

pub use result::DeployOutcome;
pub use use_case::DeployUseCase;
