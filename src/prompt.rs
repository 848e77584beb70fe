//! Selection prompts
//!
//! [`TerminalSelector`] draws an arrow-key menu; [`LineSelector`] is the
//! numbered-list fallback for piped stdin.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};

/// Present `items` and return the chosen index, or `None` if the user cancelled
pub trait Selector {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
}

/// Pick the interactive menu when attached to a terminal
pub fn default_selector() -> Box<dyn Selector> {
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        Box::new(TerminalSelector)
    } else {
        Box::new(LineSelector::new(io::stdin().lock(), io::stdout()))
    }
}

pub struct TerminalSelector;

impl Selector for TerminalSelector {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .context("Prompt failed")
    }
}

/// Reads a 1-based item number per line
pub struct LineSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Selector for LineSelector<R, W> {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        writeln!(self.output, "{}", prompt.blue())?;
        for (idx, item) in items.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", idx + 1, item.bright_white())?;
        }

        loop {
            write!(self.output, "Your selection (empty to cancel): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Prompt failed")?;

            let choice = line.trim();
            if read == 0 || choice.is_empty() {
                return Ok(None);
            }

            match choice.parse::<usize>() {
                Ok(n) if n >= 1 && n <= items.len() => return Ok(Some(n - 1)),
                _ => {
                    writeln!(
                        self.output,
                        "{} Enter a number between 1 and {}",
                        "⚠".yellow(),
                        items.len()
                    )?;
                }
            }
        }
    }
}
