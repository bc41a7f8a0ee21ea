//! Per-opcode SCSI command parsers. Each submodule owns one CDB layout and
//! produces the matching typed command from a closed correlation.

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Shared 6-byte CDB header extraction and the sense-exchange decode path.
pub mod common;
/// INQUIRY (0x12).
pub mod inquiry;
/// MODE SENSE(6) (0x1A).
pub mod mod_sense;
/// PREVENT ALLOW MEDIUM REMOVAL (0x1E).
pub mod prevent_allow_removal;
/// READ(10) (0x28).
pub mod read;
/// READ CAPACITY(10) (0x25).
pub mod read_capacity;
/// REQUEST SENSE (0x03).
pub mod request_sense;
/// START STOP UNIT (0x1B).
pub mod start_stop_unit;
/// TEST UNIT READY (0x00).
pub mod test_unit_ready;
/// Fallback for anything outside the table.
pub mod unknown;
