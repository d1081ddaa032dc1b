//! Remote build script
//!
//! Renders the shell text sent to the remote host after the copies.

/// Literal printed by the remote session once the build succeeded
pub const COMPLETION_MARKER: &str = "All done";

/// Shell script executed in a single remote session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteScript {
    text: String,
}

impl RemoteScript {
    /// `cd` into `target_dir`, `make clean`, `make`, then echo the marker.
    ///
    /// `target_dir` is left unquoted so the remote shell expands `~`.
    /// `set -e` stops the session at the first failing command, so the
    /// marker only appears after a successful build.
    pub fn clean_build(target_dir: &str) -> Self {
        let text = format!(
            "#!/bin/bash\n\
             set -e\n\
             cd {target_dir}\n\
             make clean\n\
             make\n\
             echo \"{COMPLETION_MARKER}\"\n"
        );
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Command lines of the script, without the shebang and shell options
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.text
            .lines()
            .filter(|line| !line.starts_with("#!") && !line.starts_with("set "))
    }
}

impl std::fmt::Display for RemoteScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
