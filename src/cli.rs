//! CLI definitions for stack-menu
//!
//! Running without flags opens the action menu over the `stack` folder.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_COMPOSE_BIN, DEFAULT_DOCKER_BIN, DEFAULT_ROOT};

#[derive(Parser, Debug)]
#[command(name = "stack-menu", version)]
#[command(about = "Pick a compose stack and start, stop or inspect it", long_about = None)]
pub struct Cli {
    /// Folder containing one subdirectory per stack
    #[arg(short, long, env = "STACK_MENU_ROOT", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Run this action instead of showing the action menu
    #[arg(short, long, value_enum)]
    pub action: Option<Action>,

    /// Orchestration tool used for up/down/ps
    #[arg(long, env = "STACK_MENU_COMPOSE", default_value = DEFAULT_COMPOSE_BIN)]
    pub compose_bin: String,

    /// Tool used to query container stats
    #[arg(long, env = "STACK_MENU_DOCKER", default_value = DEFAULT_DOCKER_BIN)]
    pub docker_bin: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Start a stack in the background
    Create,
    /// Stop and remove a stack
    Remove,
    /// Show the stack's containers
    Status,
    /// Show resource usage for each container in the stack
    Stats,
}

impl Action {
    /// Menu order
    pub const ALL: [Action; 4] = [Action::Create, Action::Remove, Action::Status, Action::Stats];

    pub fn label(self) -> &'static str {
        match self {
            Action::Create => "Create Stack",
            Action::Remove => "Remove Stack",
            Action::Status => "Show Stack Status",
            Action::Stats => "Show Docker Stats",
        }
    }

    /// Prompt shown when picking the stack this action applies to
    pub fn stack_prompt(self) -> &'static str {
        match self {
            Action::Create => "Select a stack to create:",
            Action::Remove => "Select a stack to remove:",
            Action::Status => "Select a stack to show status:",
            Action::Stats => "Select a stack to show Docker stats:",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["stack-menu"]).unwrap();
        assert_eq!(cli.action, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_action_and_verbosity() {
        let cli = Cli::try_parse_from(["stack-menu", "--action", "stats", "-vv"]).unwrap();
        assert_eq!(cli.action, Some(Action::Stats));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_menu_labels_in_order() {
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Create Stack",
                "Remove Stack",
                "Show Stack Status",
                "Show Docker Stats"
            ]
        );
    }
}
