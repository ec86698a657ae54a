// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations for the `shellkit` binary
//!
//! Each command writes through a `Console`, so tests drive them with
//! in-memory streams.

pub mod confirm;
pub mod inspect;
pub mod settings;
