use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::info;

use super::command::Invocation;

/// Runs external commands to completion, one at a time
pub trait CommandRunner {
    /// Run with stdout/stderr attached to the console; stdin is closed
    fn run(&mut self, invocation: &Invocation) -> Result<()>;

    /// Run and return stdout; stderr stays attached to the console
    fn capture(&mut self, invocation: &Invocation) -> Result<String>;
}

/// Spawns real processes
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        info!("Running {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context(format!("Failed to run {}", invocation.program))?;

        if !status.success() {
            anyhow::bail!("{} exited with {}", invocation.program, status);
        }

        Ok(())
    }

    fn capture(&mut self, invocation: &Invocation) -> Result<String> {
        info!("Running {}", invocation);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .context(format!("Failed to run {}", invocation.program))?;

        if !output.status.success() {
            anyhow::bail!("{} exited with {}", invocation.program, output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
