//! Terminal and JSON output for the xdp-sync binary

pub mod context;
pub mod error;
pub mod json;
pub mod sinks;
pub mod terminal;
pub mod theme;
