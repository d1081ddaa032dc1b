//! xdp-sync - deploy an XDP test program to a remote build host
//!
//! Copies `Makefile` and `xdp_copy_tail_call.c` to a remote directory with
//! `scp`, then runs `make clean && make` there over `ssh`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOutcome, DeployUseCase};
pub use config::{CliOverrides, Config};
pub use domain::entities::DeployPlan;
pub use domain::ports::{DeployEvent, DeployEventSink, RemoteTransport, TransportError};
pub use domain::value_objects::Target;
pub use error::{DeployError, DeployResult};
pub use infrastructure::OpenSshTransport;
