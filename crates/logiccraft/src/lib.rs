//! # logiccraft
//!
//! **CLI Binary**
//!
//! This is the entry point for the `logiccraft` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load `logiccraft.toml`
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
pub mod config;
mod error_hints;
mod logging;
pub mod render;

use anyhow::Result;
use clap::Parser;
use logiccraft_config::Cli;

/// Entry point used by the `logiccraft` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let toml = config::load_toml_config(&cli.global)?;
    commands::dispatch(cli, toml.as_ref())
}

/// Render an error for stderr, with hints when the cause is recognizable.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
