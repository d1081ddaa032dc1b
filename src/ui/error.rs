use crate::ui::json::events::ErrorEvent;
use crate::ui::theme::Icon;
use xdp_sync::DeployError;

/// Process exit code for a failed run
///
/// The failing transport's exit code is passed through unchanged; anything
/// without one exits with 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeployError>()
        .and_then(DeployError::exit_code)
        .filter(|code| *code != 0)
        .unwrap_or(1)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut text = format!("{} {}\n", icon, err);

    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        if let Some(hint) = hint(deploy) {
            text.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                hint
            ));
        }
    }

    text
}

fn hint(err: &DeployError) -> Option<&'static str> {
    use xdp_sync::TransportError;

    match err {
        DeployError::Copy {
            source: TransportError::MissingLocalFile { .. },
            ..
        } => Some("Run xdp-sync from the directory holding Makefile and xdp_copy_tail_call.c."),
        DeployError::Copy {
            source: TransportError::Spawn { .. },
            ..
        }
        | DeployError::Exec {
            source: TransportError::Spawn { .. },
            ..
        } => Some("Install the OpenSSH client or point XDP_SYNC_SCP / XDP_SYNC_SSH at it."),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let (code, exit) = match err.downcast_ref::<DeployError>() {
            Some(deploy) => (deploy.code(), deploy.exit_code()),
            None => ("error", None),
        };
        let event = ErrorEvent::new("deploy", code, err.to_string()).with_exit_code(exit);
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}
