// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::console::ColorMode;
use crate::error::{Result, ShellKitError};

use super::Settings;

/// Narrowest console width that still leaves room for indented messages
pub const MIN_CONSOLE_WIDTH: usize = 10;

impl Settings {
    /// Apply `SHELLKIT_QUIET`, `SHELLKIT_ASSUME_YES` and `NO_COLOR` from the
    /// process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using a custom variable lookup.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Priority: env var > config file.
        if let Some(quiet) = lookup("SHELLKIT_QUIET").and_then(|v| parse_switch(&v)) {
            self.console.quiet = quiet;
        }
        if let Some(yes) = lookup("SHELLKIT_ASSUME_YES").and_then(|v| parse_switch(&v)) {
            self.console.assume_yes = yes;
        }
        // https://no-color.org: any non-empty value disables color
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.console.color = ColorMode::Never;
        }
    }

    /// Reject settings the console cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.console.width < MIN_CONSOLE_WIDTH {
            return Err(ShellKitError::Config(format!(
                "console.width must be at least {}, got {}",
                MIN_CONSOLE_WIDTH, self.console.width
            )));
        }
        Ok(())
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        other => {
            tracing::warn!(
                target: "shellkit.settings",
                value = other,
                "ignoring unrecognized boolean environment value"
            );
            None
        }
    }
}
