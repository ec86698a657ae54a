// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! shellkit - inspect script argument tokenizing from your terminal
//!
//! Entry point for the shellkit CLI application.

use std::process::ExitCode;

use clap::Parser;

use shellkit::cli::{Cli, Commands};
use shellkit::commands;
use shellkit::config::Settings;
use shellkit::console::{ColorMode, Console, ConsoleConfig};
use shellkit::error::Result;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on shellkit diagnostics; `RUST_LOG` still applies.
    if cli.verbose > 0 {
        for directive in [
            "shellkit.arguments=debug",
            "shellkit.console=debug",
            "shellkit.settings=debug",
        ] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            let mut console = Console::stderr(ConsoleConfig::default());
            if console.report_failure(&err).is_err() {
                eprintln!("Error: {}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let mut settings = Settings::load_from(&settings_path)?;
    settings.apply_env_overrides();

    // Flags win over file and environment
    if cli.quiet {
        settings.console.quiet = true;
    }
    if cli.assume_yes {
        settings.console.assume_yes = true;
    }
    if cli.no_color {
        settings.console.color = ColorMode::Never;
    }
    settings.validate()?;

    let mut console = Console::stdio(settings.console.clone());

    // Dispatch to appropriate command
    match cli.command {
        Commands::Inspect(args) => {
            commands::inspect::execute(&mut console, &args, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Confirm(args) => {
            if commands::confirm::execute(&mut console, &args)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Commands::Settings(args) => {
            commands::settings::execute(&mut console, &args, &settings, &settings_path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
