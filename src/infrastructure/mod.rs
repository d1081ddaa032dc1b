//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `remote/` - OpenSSH transport (scp copy, ssh exec)

pub mod remote;

pub use remote::{OpenSshTransport, ScpCopy, SshExec};
