// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! READ(10) — recognized and dispatched; LBA/transfer-length decoding is
//! not implemented.

use crate::{
    control_block::common::CdbHeader,
    models::{
        common::{BulkCommand, CommandFrames},
        error::DecodeError,
        opcode::ScsiOpcode,
    },
};

#[derive(Debug)]
pub struct Read10 {
    pub header: CdbHeader,
    frames: CommandFrames,
}

impl Read10 {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let header = CdbHeader::parse(&frames.cbw.command_block)?;
        Ok(Self { header, frames })
    }
}

impl BulkCommand for Read10 {
    fn opcode(&self) -> u8 {
        ScsiOpcode::Read10 as u8
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
