//! This module defines the data structures for Bulk-Only Transport envelopes
//! and decoded SCSI commands.

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Defines the command-frame container and the common command trait.
pub mod common;
/// Defines the structures for SCSI sense data.
pub mod data;
/// Defines the typed decode-error taxonomy.
pub mod error;
/// Defines the SCSI opcode enumeration.
pub mod opcode;
/// Defines the typed SCSI command enumeration and opcode dispatch.
pub mod parse;
/// Defines the raw USB transaction input type.
pub mod transaction;
/// Defines the CBW and CSW envelope structures.
pub mod wrapper;
