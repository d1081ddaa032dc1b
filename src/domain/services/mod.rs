//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

mod remote_script;

pub use remote_script::{RemoteScript, COMPLETION_MARKER};
