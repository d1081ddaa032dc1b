//! Console Event Sink
//!
//! Human-readable progress lines on stderr. Stdout is left to the remote
//! build so its last line stays the remote completion marker.

use crate::ui::context::UiContext;
use crate::ui::theme::{dim, Icon};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use xdp_sync::domain::ports::{DeployEvent, DeployEventSink};

pub struct ConsoleEventSink {
    ui: UiContext,
    dry_run: AtomicBool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            dry_run: AtomicBool::new(false),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    /// Text for `event`, or `None` when the verbosity level hides it
    fn render(&self, event: &DeployEvent) -> Option<String> {
        let verbose = self.ui.verbose;
        let dry_run = self.dry_run.load(Ordering::Relaxed);

        match event {
            DeployEvent::Started {
                destination,
                file_count,
                dry_run,
            } => {
                let label = if *dry_run { "Would deploy" } else { "Deploying" };
                Some(format!(
                    "{} {} {} file(s) to {}",
                    self.icon(Icon::Remote),
                    label,
                    file_count,
                    destination
                ))
            }

            DeployEvent::CopyStarted {
                local, destination, ..
            } => Some(format!(
                "{} scp {} {}",
                self.icon(Icon::Progress),
                local.display(),
                destination
            )),

            DeployEvent::CopyFinished { local, .. } if verbose > 0 => Some(format!(
                "{} copied {}",
                self.icon(Icon::Success),
                local.display()
            )),

            DeployEvent::ExecStarted { host, script } => {
                let mut text = format!(
                    "{} ssh {} (make clean && make)",
                    self.icon(Icon::Progress),
                    host
                );
                if dry_run || verbose > 0 {
                    for line in script.lines() {
                        text.push('\n');
                        text.push_str(&format!(
                            "  {} {}",
                            self.icon(Icon::Arrow),
                            dim(line, self.ui.color)
                        ));
                    }
                }
                Some(text)
            }

            DeployEvent::Completed {
                executed: false, ..
            } if dry_run => Some(format!(
                "{} Dry run: nothing was sent to the remote host",
                self.icon(Icon::Warning)
            )),

            DeployEvent::Completed {
                copied,
                executed: true,
                duration_ms,
            } if verbose > 0 => Some(format!(
                "{} {} file(s) copied, remote build finished in {}ms",
                self.icon(Icon::Success),
                copied,
                duration_ms
            )),

            _ => None,
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let DeployEvent::Started { dry_run, .. } = &event {
            self.dry_run.store(*dry_run, Ordering::Relaxed);
        }

        let Some(text) = self.render(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}
