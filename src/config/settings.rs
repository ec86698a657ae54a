// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for shellkit
//!
//! Handles loading and saving settings from ~/.shellkit/settings.json

use serde::{Deserialize, Serialize};

use crate::console::ConsoleConfig;

mod io;
mod validation;

pub use validation::MIN_CONSOLE_WIDTH;

/// Main settings structure, stored in ~/.shellkit/settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Console output settings
    #[serde(default)]
    pub console: ConsoleConfig,
}
