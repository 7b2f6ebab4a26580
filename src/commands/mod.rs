//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod decompose_command;
pub mod styles_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use decompose_command::DecomposeCommand;
pub use styles_command::StylesCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::raster::errors::RectResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct RectkitCommandFactory;

impl RectkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RectkitCommandFactory
    }
}

impl Default for RectkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RectkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RectResult<Box<dyn Command + 'a>> {
        if args.get_flag("list-styles") {
            Ok(Box::new(StylesCommand::new(args, logger)?))
        } else {
            // Default to decomposition
            Ok(Box::new(DecomposeCommand::new(args, logger)?))
        }
    }
}
