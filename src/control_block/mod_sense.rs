// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! MODE SENSE(6) — recognized and dispatched; the mode-page payload itself
//! is not decoded further.

use crate::{
    control_block::common::CdbHeader,
    models::{
        common::{BulkCommand, CommandFrames},
        error::DecodeError,
        opcode::ScsiOpcode,
    },
};

#[derive(Debug)]
pub struct ModeSense6 {
    pub header: CdbHeader,
    frames: CommandFrames,
}

impl ModeSense6 {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let header = CdbHeader::parse(&frames.cbw.command_block)?;
        Ok(Self { header, frames })
    }
}

impl BulkCommand for ModeSense6 {
    fn opcode(&self) -> u8 {
        ScsiOpcode::ModeSense6 as u8
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
