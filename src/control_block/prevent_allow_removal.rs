// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! PREVENT ALLOW MEDIUM REMOVAL — recognized and dispatched; the PREVENT
//! bit semantics are not decoded further.

use crate::{
    control_block::common::CdbHeader,
    models::{
        common::{BulkCommand, CommandFrames},
        error::DecodeError,
        opcode::ScsiOpcode,
    },
};

#[derive(Debug)]
pub struct PreventAllowMediumRemoval {
    pub header: CdbHeader,
    frames: CommandFrames,
}

impl PreventAllowMediumRemoval {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let header = CdbHeader::parse(&frames.cbw.command_block)?;
        Ok(Self { header, frames })
    }
}

impl BulkCommand for PreventAllowMediumRemoval {
    fn opcode(&self) -> u8 {
        ScsiOpcode::PreventAllowMediumRemoval as u8
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
