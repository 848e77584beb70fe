//! Docker operations module
//!
//! This module contains everything that touches the external tools:
//! - Building compose and stats command lines
//! - Running them with the console attached

pub mod command;
pub mod runner;

pub use command::Invocation;
pub use runner::{CommandRunner, SystemRunner};
