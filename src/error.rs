// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for shellkit
//!
//! Tokenizing and lookups never fail; errors come from reading the
//! process environment, console I/O and the settings file.

use thiserror::Error;

/// Main error type for shellkit operations
#[derive(Error, Debug)]
pub enum ShellKitError {
    /// Not running as a command-line invocation
    #[error("Environment error: {0}")]
    Environment(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for shellkit operations
pub type Result<T> = std::result::Result<T, ShellKitError>;
