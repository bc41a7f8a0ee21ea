//! This crate decodes USB Mass Storage Class (Bulk-Only Transport) traffic
//! into typed SCSI commands, for use by a USB traffic inspector.
// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Handles configuration and logging.
pub mod cfg;
/// Implements the per-opcode SCSI command parsers (control blocks).
pub mod control_block;
/// Contains the stream-facing recognizer and the decoding pipeline.
pub mod handlers;
/// Defines the data structures for transactions, wrappers and commands.
pub mod models;
/// Contains the state machine correlating command exchanges.
pub mod state_machine;
