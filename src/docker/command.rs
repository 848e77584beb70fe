//! Command lines for the orchestration and stats tools
//!
//! Nothing here runs a process; see [`super::runner`] for that.

use std::{fmt, path::Path};

/// One external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `<compose> -f <file> <subcommand...>`
    fn compose(compose_bin: &str, file: &Path, subcommand: &[&str]) -> Self {
        let mut args = vec!["-f".to_string(), file.to_string_lossy().to_string()];
        args.extend(subcommand.iter().map(|s| s.to_string()));
        Self {
            program: compose_bin.to_string(),
            args,
        }
    }

    /// Start the stack detached
    pub fn compose_up(compose_bin: &str, file: &Path) -> Self {
        Self::compose(compose_bin, file, &["up", "-d"])
    }

    pub fn compose_down(compose_bin: &str, file: &Path) -> Self {
        Self::compose(compose_bin, file, &["down"])
    }

    pub fn compose_ps(compose_bin: &str, file: &Path) -> Self {
        Self::compose(compose_bin, file, &["ps"])
    }

    /// Container IDs only, whitespace separated on stdout
    pub fn compose_ps_ids(compose_bin: &str, file: &Path) -> Self {
        Self::compose(compose_bin, file, &["ps", "-q"])
    }

    /// A single stats snapshot for one container
    pub fn stats_once(docker_bin: &str, container_id: &str) -> Self {
        Self::new(docker_bin, ["stats", "--no-stream", container_id])
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Split `ps -q` output into container IDs, keeping their order
pub fn parse_container_ids(output: &str) -> Vec<String> {
    output.split_whitespace().map(|s| s.to_string()).collect()
}
