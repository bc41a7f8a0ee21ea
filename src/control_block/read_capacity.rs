// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! READ CAPACITY(10) — recognized and dispatched; the 8-byte capacity
//! payload is not decoded further.

use crate::{
    control_block::common::CdbHeader,
    models::{
        common::{BulkCommand, CommandFrames},
        error::DecodeError,
        opcode::ScsiOpcode,
    },
};

#[derive(Debug)]
pub struct ReadCapacity10 {
    pub header: CdbHeader,
    frames: CommandFrames,
}

impl ReadCapacity10 {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let header = CdbHeader::parse(&frames.cbw.command_block)?;
        Ok(Self { header, frames })
    }
}

impl BulkCommand for ReadCapacity10 {
    fn opcode(&self) -> u8 {
        ScsiOpcode::ReadCapacity10 as u8
    }

    fn frames(&self) -> &CommandFrames {
        &self.frames
    }

    fn into_frames(self) -> CommandFrames {
        self.frames
    }

    fn summarize(&self) -> Option<String> {
        Some("not implemented".to_string())
    }
}
