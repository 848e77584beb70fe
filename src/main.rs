//! stack-menu - interactive menu for docker-compose stacks
//!
//! Finds every directory under the stack folder that holds a
//! `docker-compose.yaml`, lets the user pick one, and starts, stops or
//! inspects it with docker-compose.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli;
mod config;
mod dispatch;
mod docker;
mod logging;
mod prompt;
mod stack;

use cli::{Action, Cli};
use config::Settings;
use dispatch::Dispatcher;
use docker::SystemRunner;
use prompt::Selector;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{} {:#}", "⚠".yellow(), e);
    }

    // Failures are reported here; the exit code stays 0
    if let Err(e) = run(&cli) {
        println!("{} {:#}", "✗".red(), e);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_cli(cli)?;
    let mut selector = prompt::default_selector();

    let action = match cli.action {
        Some(action) => action,
        None => match choose_action(selector.as_mut()) {
            Ok(Some(action)) => action,
            Ok(None) => {
                println!("{} Action selection cancelled", "⚠".yellow());
                return Ok(());
            }
            Err(e) => {
                println!("{} Action selection failed: {:#}", "✗".red(), e);
                return Ok(());
            }
        },
    };

    let mut runner = SystemRunner;
    Dispatcher::new(&settings, selector.as_mut(), &mut runner).run(action)
}

fn choose_action(selector: &mut dyn Selector) -> Result<Option<Action>> {
    let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();

    Ok(selector
        .select("Select an action:", &labels)?
        .and_then(|idx| Action::ALL.get(idx).copied()))
}
