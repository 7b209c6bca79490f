// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Library surface of the CM compiler shell.
//!
//! The binary is a thin wrapper; the compile command is exposed here so
//! integration tests can drive the full pipeline against scratch
//! directories.

pub mod commands;
