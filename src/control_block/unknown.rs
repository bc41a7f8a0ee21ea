// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Fallback for opcodes outside the dispatch table. The raw opcode and the
//! accumulated transactions are kept; nothing else is interpreted.

use crate::models::common::{BulkCommand, CommandFrames};

#[derive(Debug)]
pub struct UnknownCommand {
    raw_opcode: u8,
    frames: CommandFrames,
}

impl UnknownCommand {
    pub fn from_frames(raw_opcode: u8, frames: CommandFrames) -> Self {
        Self { raw_opcode, frames }
    }
}

impl BulkCommand for UnknownCommand {
    fn opcode(&self) -> u8 {
        self.raw_opcode
    }

    fn frames(&self) -> &CommandFrames {
        &self.frames
    }

    fn into_frames(self) -> CommandFrames {
        self.frames
    }

    fn summarize(&self) -> Option<String> {
        Some("unknown scsi command".to_string())
    }
}
