// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! arborrs - export GitHub issues as a nested forest.
//!
//! This crate provides the `arbor` command line tool around
//! [`arbor_core`]: it fetches issues through an [`IssueSource`], lets the
//! core engine infer parent/child relationships, and writes the resulting
//! forest as JSON.
//!
//! # Main Components
//!
//! - [`Config`] - settings loaded from `arbor.toml`
//! - [`source`] - the `gh` adapter and the fixture replay source
//! - [`Error`] - error types for all operations
//!
//! ```rust,ignore
//! // Exports with the configuration found in `./arbor.toml`, if any.
//! arborrs::run(None, None)?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
mod env;
pub mod error;
pub mod help;
pub mod logging;
pub mod source;

pub use cli::{Cli, Command, ExportArgs};
pub use config::Config;
pub use error::{Error, Result};
pub use source::{FixtureSource, GhCli, IssueSource};

use clap::CommandFactory;
use clap_complete::generate;
use std::path::Path;

/// Runs `command`, or the default export when none is given.
///
/// Only the commands that read settings load the configuration, so a broken
/// config file does not stand in the way of `validate` or `completion`.
pub fn run(command: Option<Command>, config_path: Option<&Path>) -> Result<()> {
    match command.unwrap_or_else(|| Command::Export(ExportArgs::default())) {
        Command::Export(args) => {
            let config = Config::discover(config_path)?;
            commands::export::run(&config, args)
        }
        Command::Validate { file } => commands::validate::run(&file),
        Command::Countdown { target, title } => {
            let config = Config::discover(config_path)?;
            commands::countdown::run(&config, target.as_deref(), title)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "arbor", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
