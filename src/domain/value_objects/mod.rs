//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod target;

pub use target::Target;
