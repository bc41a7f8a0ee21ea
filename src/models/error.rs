// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use thiserror::Error;

/// Everything that can go wrong while decoding one transaction or closing
/// one correlated command.
///
/// There is deliberately no variant for an unsupported opcode: those
/// dispatch to the `Unknown` command variant instead of failing.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload ends before the layout it announces.
    #[error("{what} truncated: need {need} bytes, got {got}")]
    TruncatedPayload {
        what: &'static str,
        need: usize,
        got: usize,
    },

    /// A mandatory field of a closed command cannot be read.
    #[error("malformed {what}: {reason}")]
    MalformedCommand {
        what: &'static str,
        reason: String,
    },

    /// A status wrapper answered a different tag than the open command's.
    #[error("status tag {got:#010x} closed a command opened as {expected:#010x}")]
    TagMismatch { expected: u32, got: u32 },
}
