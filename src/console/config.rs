// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-console output configuration

use serde::{Deserialize, Serialize};

/// When to write escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration held by each `Console`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Suppress all output except question prompts
    #[serde(default)]
    pub quiet: bool,

    /// Answer boolean questions without prompting
    #[serde(default)]
    pub assume_yes: bool,

    /// Escape sequence policy
    #[serde(default)]
    pub color: ColorMode,

    /// Width of rules; messages wrap at `width - 3`
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_width() -> usize {
    80
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            assume_yes: false,
            color: ColorMode::default(),
            width: default_width(),
        }
    }
}
