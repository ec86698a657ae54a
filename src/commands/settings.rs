// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings display command

use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::args::SettingsArgs;
use crate::config::Settings;
use crate::console::Console;
use crate::error::Result;

/// Execute the settings command
///
/// Prints the effective settings as JSON; with `--write`, also saves them
/// to `path`.
pub fn execute<W: Write, R: BufRead>(
    console: &mut Console<W, R>,
    args: &SettingsArgs,
    settings: &Settings,
    path: &Path,
) -> Result<()> {
    if args.write {
        settings.save_to(path)?;
        tracing::info!(target: "shellkit.settings", path = %path.display(), "wrote settings");
        console.send(&format!("Wrote {}", path.display()))?;
        console.send_done_flag(None)?;
    }
    console.send_line(&serde_json::to_string_pretty(settings)?)
}
