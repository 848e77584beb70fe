use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::Cli;

/// Name of the service definition file that marks a directory as a stack
pub const COMPOSE_FILE: &str = "docker-compose.yaml";

pub const DEFAULT_ROOT: &str = "stack";
pub const DEFAULT_COMPOSE_BIN: &str = "docker-compose";
pub const DEFAULT_DOCKER_BIN: &str = "docker";

/// Runtime settings resolved from flags and environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder scanned for stacks
    pub root: PathBuf,
    /// Orchestration tool (`docker-compose`)
    pub compose_bin: String,
    /// Stats tool (`docker`)
    pub docker_bin: String,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            root: expand_home(&cli.root)?,
            compose_bin: cli.compose_bin.clone(),
            docker_bin: cli.docker_bin.clone(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            compose_bin: DEFAULT_COMPOSE_BIN.to_string(),
            docker_bin: DEFAULT_DOCKER_BIN.to_string(),
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home_dir = dirs::home_dir().context("Failed to get home directory")?;
            Ok(home_dir.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
