// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! shellkit - argument tokenizing and console helpers for command-line scripts.
//!
//! Modules:
//! - `arguments`: single-pass classification of invocation tokens into
//!   options and positionals, plus read-only lookups
//! - `console`: text, SGR styles, prompts and error reports, with quiet and
//!   assume-yes modes held per console instance
//! - `config`: settings file and environment overrides
//! - `cli`, `commands`: the `shellkit` binary's front end

pub mod arguments;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod utils;

pub use arguments::{Arguments, OptionValue, TokenKind};
pub use console::{ColorMode, Console, ConsoleConfig, Style};
pub use error::{Result, ShellKitError};
