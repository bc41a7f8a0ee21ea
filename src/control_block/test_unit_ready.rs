// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! TEST UNIT READY — 6-byte CDB, no data phase (SPC):
//!
//!   [0] = 0x00 (TEST UNIT READY)
//!   [1]..[4] = reserved
//!   [5] = CONTROL

use crate::models::{
    common::{BulkCommand, CommandFrames},
    error::DecodeError,
    opcode::ScsiOpcode,
};

#[derive(Debug)]
pub struct TestUnitReady {
    pub control: u8,
    frames: CommandFrames,
}

impl TestUnitReady {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let cdb = &frames.cbw.command_block;
        if cdb.len() < 6 {
            return Err(DecodeError::TruncatedPayload {
                what: "TEST UNIT READY CDB",
                need: 6,
                got: cdb.len(),
            });
        }
        let control = cdb[5];
        Ok(Self { control, frames })
    }
}

impl BulkCommand for TestUnitReady {
    fn opcode(&self) -> u8 {
        ScsiOpcode::TestUnitReady as u8
    }

    fn frames(&self) -> &CommandFrames {
        &self.frames
    }

    fn into_frames(self) -> CommandFrames {
        self.frames
    }

    fn summarize(&self) -> Option<String> {
        Some(self.control.to_string())
    }
}
