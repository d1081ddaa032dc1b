//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::ui::json::events::{CompleteEvent, CopyEvent, ExecEvent, StartEvent};
use crate::ui::json::write_typed_event;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;
use xdp_sync::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write<T: Serialize>(&self, event: &T) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write_typed_event(&mut *writer, event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                destination,
                file_count,
                dry_run,
            } => self.write(&StartEvent::new(
                "deploy",
                &destination,
                file_count,
                dry_run,
            )),

            DeployEvent::CopyStarted {
                index,
                local,
                destination,
            } => self.write(&CopyEvent::started(
                index,
                local.display().to_string(),
                &destination,
            )),

            DeployEvent::CopyFinished { index, local } => {
                self.write(&CopyEvent::finished(index, local.display().to_string()))
            }

            DeployEvent::ExecStarted { host, script } => {
                self.write(&ExecEvent::started(&host, &script))
            }

            DeployEvent::ExecFinished { host, output } => self.write(&ExecEvent::finished(
                &host,
                output.stdout.as_deref(),
                output.stderr.as_deref(),
            )),

            DeployEvent::ExecFailed { host, output } => self.write(&ExecEvent::failed(
                &host,
                output.stdout.as_deref(),
                output.stderr.as_deref(),
            )),

            DeployEvent::Completed {
                copied,
                executed,
                duration_ms,
            } => self.write(
                &CompleteEvent::success("deploy", copied, executed).with_duration(duration_ms),
            ),
        }
    }
}
