// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Script argument parsing
//!
//! `Arguments` captures the invocation tokens once, classifies them with a
//! single scan and answers read-only queries afterwards.
//!
//! Naming: an *option* is `--name`, `--name=value`, `-c [value]` or a
//! `-abc` cluster; a *positional* is every other token.

pub mod tokenizer;

use std::ffi::OsString;

use crate::error::{Result, ShellKitError};

pub use tokenizer::{is_flag_shaped, tokenize, OptionMap, TokenKind, Tokenized};

/// Result of looking up an option's value
///
/// Keeps "given without a value" apart from "not given at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    /// The option carried a value
    Value(&'a str),
    /// The option was given as a boolean flag
    Flag,
    /// The option was not given
    Missing,
}

impl<'a> OptionValue<'a> {
    /// True for `Value` and `Flag`
    pub fn is_present(&self) -> bool {
        !matches!(self, OptionValue::Missing)
    }

    /// True only for `Flag`
    pub fn is_flag(&self) -> bool {
        matches!(self, OptionValue::Flag)
    }

    /// The carried value, if any
    pub fn value(&self) -> Option<&'a str> {
        match *self {
            OptionValue::Value(value) => Some(value),
            OptionValue::Flag | OptionValue::Missing => None,
        }
    }

    fn from_entry(entry: Option<&'a Option<String>>) -> Self {
        match entry {
            Some(Some(value)) => OptionValue::Value(value.as_str()),
            Some(None) => OptionValue::Flag,
            None => OptionValue::Missing,
        }
    }
}

/// Parsed script arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    program: Option<String>,
    raw_input: Vec<String>,
    parsed: Tokenized,
}

impl Arguments {
    /// Capture and parse the current process's arguments.
    ///
    /// Fails when there is no argument vector (not a command-line
    /// invocation) or when an argument is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_argv_os(std::env::args_os())
    }

    /// Parse an OS argument vector whose first element is the program name.
    pub fn from_argv_os<I>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let argv = argv
            .into_iter()
            .map(|arg| {
                arg.into_string().map_err(|raw| {
                    ShellKitError::Environment(format!(
                        "argument is not valid Unicode: {}",
                        raw.to_string_lossy()
                    ))
                })
            })
            .collect::<Result<Vec<String>>>()?;
        Self::from_argv(argv)
    }

    /// Parse an argument vector whose first element is the program name.
    pub fn from_argv<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().ok_or_else(|| {
            ShellKitError::Environment(
                "no argument vector available; arguments can only be read from a command-line invocation"
                    .to_string(),
            )
        })?;

        let mut arguments = Self::from_tokens(argv);
        arguments.program = Some(program);
        Ok(arguments)
    }

    /// Parse tokens that already exclude the program name.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw_input: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let parsed = tokenize(&raw_input);
        Self {
            program: None,
            raw_input,
            parsed,
        }
    }

    /// Program name, when built from a full argument vector
    pub fn program_name(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// Tokens as captured, program name excluded
    pub fn raw_input(&self) -> &[String] {
        &self.raw_input
    }

    pub fn options(&self) -> &OptionMap {
        &self.parsed.options
    }

    pub fn positionals(&self) -> &[String] {
        &self.parsed.positionals
    }

    /// Classification of each raw token, in input order
    pub fn token_kinds(&self) -> &[TokenKind] {
        &self.parsed.kinds
    }

    pub fn tokenized(&self) -> &Tokenized {
        &self.parsed
    }

    pub fn option_count(&self) -> usize {
        self.parsed.options.len()
    }

    pub fn has_options(&self) -> bool {
        !self.parsed.options.is_empty()
    }

    pub fn positional_count(&self) -> usize {
        self.parsed.positionals.len()
    }

    pub fn has_positionals(&self) -> bool {
        !self.parsed.positionals.is_empty()
    }

    /// Positional at a zero-based index
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.parsed.positionals.get(index).map(String::as_str)
    }

    /// Index of the first positional equal to `value`
    pub fn positional_index(&self, value: &str) -> Option<usize> {
        self.parsed.positionals.iter().position(|p| p == value)
    }

    pub fn has_positional(&self, value: &str) -> bool {
        self.positional_index(value).is_some()
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.parsed.options.contains_key(name)
    }

    /// True if any of the alternative names was given, e.g. `&["v", "verbose"]`
    pub fn has_any_option(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_option(name))
    }

    /// Look up an option's value
    pub fn option_value(&self, name: &str) -> OptionValue<'_> {
        OptionValue::from_entry(self.parsed.options.get(name))
    }

    /// Look up the first given name among alternatives, in the order listed
    pub fn option_value_any(&self, names: &[&str]) -> OptionValue<'_> {
        names
            .iter()
            .find_map(|name| self.parsed.options.get(*name))
            .map_or(OptionValue::Missing, |entry| OptionValue::from_entry(Some(entry)))
    }
}
