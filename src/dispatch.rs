//! Stack actions
//!
//! Every action follows the same steps: discover stacks, ask which one,
//! run the orchestration tool against its compose file.

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::{
    cli::Action,
    config::Settings,
    docker::{CommandRunner, Invocation, command::parse_container_ids},
    prompt::Selector,
    stack::{self, Stack},
};

pub struct Dispatcher<'a> {
    settings: &'a Settings,
    selector: &'a mut dyn Selector,
    runner: &'a mut dyn CommandRunner,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        settings: &'a Settings,
        selector: &'a mut dyn Selector,
        runner: &'a mut dyn CommandRunner,
    ) -> Self {
        Self {
            settings,
            selector,
            runner,
        }
    }

    pub fn run(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Create => self.create(),
            Action::Remove => self.remove(),
            Action::Status => self.status(),
            Action::Stats => self.stats(),
        }
    }

    /// `up -d` on the selected stack
    pub fn create(&mut self) -> Result<()> {
        let Some(stack) = self.choose_stack(Action::Create)? else {
            return Ok(());
        };

        let compose_file = stack.compose_file();
        self.runner
            .run(&Invocation::compose_up(&self.settings.compose_bin, &compose_file))
            .context("Error starting containers")?;

        println!("{} Stack started successfully!", "✓".green());
        Ok(())
    }

    /// `down` on the selected stack
    pub fn remove(&mut self) -> Result<()> {
        let Some(stack) = self.choose_stack(Action::Remove)? else {
            return Ok(());
        };

        let compose_file = stack.compose_file();
        self.runner
            .run(&Invocation::compose_down(&self.settings.compose_bin, &compose_file))
            .context("Error removing stack")?;

        println!("{} Stack removed successfully!", "✓".green());
        Ok(())
    }

    pub fn status(&mut self) -> Result<()> {
        let Some(stack) = self.choose_stack(Action::Status)? else {
            return Ok(());
        };

        let compose_file = stack.compose_file();
        self.runner
            .run(&Invocation::compose_ps(&self.settings.compose_bin, &compose_file))
            .context("Error showing stack status")?;

        Ok(())
    }

    /// One `stats --no-stream` per container, in `ps -q` order
    pub fn stats(&mut self) -> Result<()> {
        let Some(stack) = self.choose_stack(Action::Stats)? else {
            return Ok(());
        };

        let compose_file = stack.compose_file();
        let output = self
            .runner
            .capture(&Invocation::compose_ps_ids(&self.settings.compose_bin, &compose_file))
            .context("Error retrieving container IDs")?;

        let ids = parse_container_ids(&output);
        if ids.is_empty() {
            println!(
                "{} No running containers in {}",
                "⚠".yellow(),
                stack.name().bright_white()
            );
            return Ok(());
        }

        debug!("Querying stats for {} containers", ids.len());
        for id in &ids {
            self.runner
                .run(&Invocation::stats_once(&self.settings.docker_bin, id))
                .context("Error showing Docker stats")?;
        }

        Ok(())
    }

    /// Discover stacks and let the user pick one.
    ///
    /// `None` means there was nothing to pick or the user backed out; the
    /// reason has already been printed.
    fn choose_stack(&mut self, action: Action) -> Result<Option<Stack>> {
        let mut stacks = stack::discover(&self.settings.root);

        if stacks.is_empty() {
            println!(
                "{} No stacks found in {}",
                "⚠".yellow(),
                self.settings.root.display().to_string().bright_white()
            );
            return Ok(None);
        }

        let names: Vec<String> = stacks.iter().map(Stack::name).collect();
        let Some(idx) = self.selector.select(action.stack_prompt(), &names)? else {
            println!("{} Selection cancelled", "⚠".yellow());
            return Ok(None);
        };

        if idx >= stacks.len() {
            anyhow::bail!("Prompt failed: selection {} out of range", idx);
        }

        let stack = stacks.swap_remove(idx);
        debug!("Selected stack {:?}", stack.path());
        Ok(Some(stack))
    }
}
