//! Deploy command
//!
//! Copies the build files and runs the remote clean build. This is the
//! only thing the binary does.

use std::sync::Arc;

use anyhow::Result;
use xdp_sync::domain::ports::{DeployEventSink, OutputMode, RemoteTransport};
use xdp_sync::presentation::Cli;
use xdp_sync::{Config, DeployPlan, DeployUseCase, OpenSshTransport};

use crate::ui::context::UiContext;
use crate::ui::sinks::{ConsoleEventSink, JsonEventSink};
use crate::ui::theme::Icon;

pub fn cmd_deploy(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let config = Config::load(&cli.overrides());
    let plan = DeployPlan::from_config(&config);

    // JSON mode keeps stdout for events, so remote output is captured.
    let output_mode = if ui.json {
        OutputMode::Capture
    } else {
        OutputMode::Inherit
    };
    let transport = OpenSshTransport::new(&config.transport)
        .with_output_mode(output_mode)
        .with_verbose_copy(ui.verbose >= 2);

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(ui))
    };

    let use_case = DeployUseCase::new(transport);

    if cli.dry_run {
        if !ui.json && !use_case.transport().is_available() {
            eprintln!(
                "{} {} or {} not found in PATH",
                Icon::Warning.colored(ui.color, ui.unicode),
                config.transport.scp,
                config.transport.ssh
            );
        }
        use_case.preview(&plan, sink);
        return Ok(());
    }

    use_case.execute_with_events(&plan, sink)?;
    Ok(())
}
