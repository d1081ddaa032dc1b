//! Target value object - the remote host and directory a deploy writes to

/// Remote deployment target
///
/// `host` is an SSH host alias (or `user@host`); it is resolved by the
/// local SSH client configuration, never by this crate. `dir` is passed
/// through verbatim so the remote side can expand `~`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    host: String,
    dir: String,
}

impl Target {
    pub fn new(host: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            dir: dir.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Remote directory with exactly one trailing slash
    ///
    /// The slash makes `scp` treat the destination as a directory.
    pub fn remote_dir(&self) -> String {
        format!("{}/", self.dir.trim_end_matches('/'))
    }

    /// `host:dir/` as passed to `scp`
    pub fn remote_spec(&self) -> String {
        format!("{}:{}", self.host, self.remote_dir())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_spec_adds_directory_slash() {
        let target = Target::new("debian", "~/xdp-test");
        assert_eq!(target.remote_dir(), "~/xdp-test/");
        assert_eq!(target.remote_spec(), "debian:~/xdp-test/");
    }

    #[test]
    fn remote_spec_does_not_double_slash() {
        let target = Target::new("user@host", "/srv/build//");
        assert_eq!(target.remote_spec(), "user@host:/srv/build/");
    }

    #[test]
    fn remote_dir_of_root_stays_root() {
        let target = Target::new("host", "/");
        assert_eq!(target.remote_dir(), "/");
    }

    #[test]
    fn display_is_host_colon_dir() {
        let target = Target::new("debian", "~/xdp-test");
        assert_eq!(target.to_string(), "debian:~/xdp-test");
    }
}
