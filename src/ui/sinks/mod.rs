//! Deploy event sinks for the terminal and for `--json`

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
