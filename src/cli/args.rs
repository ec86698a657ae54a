// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines the arguments and subcommands of the `shellkit` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// shellkit - see how a script would read its arguments
#[derive(Parser, Debug)]
#[command(name = "shellkit")]
#[command(version, about = "Inspect script argument tokenizing and console output")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress output except prompts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Answer yes/no questions without prompting
    #[arg(short = 'y', long = "yes", global = true)]
    pub assume_yes: bool,

    /// Disable escape sequences
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize arguments and show how each one was classified
    Inspect(InspectArgs),

    /// Ask a yes/no question; exits 0 for yes and 1 for no
    Confirm(ConfirmArgs),

    /// Show or write the effective settings
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the inspect subcommand
#[derive(clap::Args, Debug, Default)]
pub struct InspectArgs {
    /// Tokens to classify; put them after `--` to pass flags through
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Arguments for the confirm subcommand
#[derive(clap::Args, Debug)]
pub struct ConfirmArgs {
    /// Question to ask
    pub question: String,

    /// Answer used for empty input (y/n)
    #[arg(long, value_parser = clap::builder::BoolishValueParser::new())]
    pub default: Option<bool>,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    /// Write the effective settings to the settings file
    #[arg(long)]
    pub write: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
