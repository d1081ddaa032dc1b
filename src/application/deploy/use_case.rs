//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Copy each plan file to the remote directory, in order
//! 2. Run the clean-and-build script in one remote session
//!
//! Steps are strictly sequential. The first failure ends the run; nothing
//! after it is attempted and the transport error is returned unchanged.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::DeployPlan;
use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink, RemoteTransport};
use crate::error::{DeployError, DeployResult};

use super::result::DeployOutcome;

/// Deploy use case - copy then build on the remote host
///
/// Parameterized by its transport so tests can record calls instead of
/// touching the network.
pub struct DeployUseCase<T>
where
    T: RemoteTransport,
{
    transport: T,
}

impl<T> DeployUseCase<T>
where
    T: RemoteTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute the deploy use case
    pub fn execute(&self, plan: &DeployPlan) -> DeployResult<DeployOutcome> {
        self.execute_with_events(plan, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        plan: &DeployPlan,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployOutcome> {
        let started = Instant::now();
        let target = plan.target();
        let remote_dir = target.remote_dir();
        let steps = plan.copy_steps();
        let mut outcome = DeployOutcome::new();

        event_sink.on_event(DeployEvent::Started {
            destination: target.remote_spec(),
            file_count: steps.len(),
            dry_run: false,
        });

        for (index, step) in steps.into_iter().enumerate() {
            event_sink.on_event(DeployEvent::CopyStarted {
                index,
                local: step.local.clone(),
                destination: step.destination.clone(),
            });

            if let Err(source) = self.transport.copy(target.host(), &step.local, &remote_dir) {
                return Err(DeployError::Copy {
                    local: step.local,
                    destination: step.destination,
                    source,
                });
            }

            event_sink.on_event(DeployEvent::CopyFinished {
                index,
                local: step.local.clone(),
            });
            outcome.copied.push(step.local);
        }

        let script = plan.script().as_str();
        event_sink.on_event(DeployEvent::ExecStarted {
            host: target.host().to_string(),
            script: script.to_string(),
        });

        let output = match self.transport.exec(target.host(), script) {
            Ok(output) => output,
            Err(source) => {
                event_sink.on_event(DeployEvent::ExecFailed {
                    host: target.host().to_string(),
                    output: source.output(),
                });
                return Err(DeployError::Exec {
                    host: target.host().to_string(),
                    source,
                });
            }
        };

        event_sink.on_event(DeployEvent::ExecFinished {
            host: target.host().to_string(),
            output: output.clone(),
        });
        outcome.output = Some(output);
        outcome.duration_ms = elapsed_ms(started);

        event_sink.on_event(DeployEvent::Completed {
            copied: outcome.copied.len(),
            executed: true,
            duration_ms: outcome.duration_ms,
        });

        Ok(outcome)
    }

    /// Report what `execute` would do without calling the transport
    pub fn preview(
        &self,
        plan: &DeployPlan,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployOutcome {
        let target = plan.target();
        let steps = plan.copy_steps();

        event_sink.on_event(DeployEvent::Started {
            destination: target.remote_spec(),
            file_count: steps.len(),
            dry_run: true,
        });

        for (index, step) in steps.into_iter().enumerate() {
            event_sink.on_event(DeployEvent::CopyStarted {
                index,
                local: step.local,
                destination: step.destination,
            });
        }

        event_sink.on_event(DeployEvent::ExecStarted {
            host: target.host().to_string(),
            script: plan.script().as_str().to_string(),
        });

        event_sink.on_event(DeployEvent::Completed {
            copied: 0,
            executed: false,
            duration_ms: 0,
        });

        DeployOutcome {
            dry_run: true,
            ..DeployOutcome::default()
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
