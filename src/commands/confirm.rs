// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Yes/no confirmation command

use std::io::{BufRead, Write};

use crate::cli::args::ConfirmArgs;
use crate::console::Console;
use crate::error::{Result, ShellKitError};

/// Execute the confirm command, returning the answer
pub fn execute<W: Write, R: BufRead>(console: &mut Console<W, R>, args: &ConfirmArgs) -> Result<bool> {
    if args.question.trim().is_empty() {
        return Err(ShellKitError::InvalidInput(
            "question must not be empty".to_string(),
        ));
    }
    console.ask_bool(&args.question, args.default)
}
