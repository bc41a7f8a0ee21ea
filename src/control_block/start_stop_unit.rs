// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! START STOP UNIT — 6-byte CDB, no data phase (SBC):
//!
//!   [0] = 0x1B (START STOP UNIT)
//!   [1] = IMMED (bit 0)
//!   [2] = reserved
//!   [3] = POWER CONDITION MODIFIER (bits 3..0)
//!   [4] = POWER CONDITION (bits 7..4), NO_FLUSH (bit 2),
//!         LOEJ (bit 1), START (bit 0)
//!   [5] = CONTROL

use crate::models::{
    common::{BulkCommand, CommandFrames},
    error::DecodeError,
    opcode::ScsiOpcode,
};

#[derive(Debug)]
pub struct StartStopUnit {
    /// IMMED: status may return before the action completes.
    pub immediate: bool,
    pub power_condition_modifier: u8,
    pub power_condition: u8,
    pub no_flush: bool,
    pub load_eject: bool,
    pub start: bool,
    frames: CommandFrames,
}

impl StartStopUnit {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let cdb = &frames.cbw.command_block;
        if cdb.len() < 6 {
            return Err(DecodeError::TruncatedPayload {
                what: "START STOP UNIT CDB",
                need: 6,
                got: cdb.len(),
            });
        }
        Ok(Self {
            immediate: cdb[1] & 0x01 != 0,
            power_condition_modifier: cdb[3] & 0x0F,
            power_condition: (cdb[4] & 0xF0) >> 4,
            no_flush: cdb[4] & 0b100 != 0,
            load_eject: cdb[4] & 0b010 != 0,
            start: cdb[4] & 0b001 != 0,
            frames,
        })
    }
}

impl BulkCommand for StartStopUnit {
    fn opcode(&self) -> u8 {
        ScsiOpcode::StartStopUnit as u8
    }

    fn frames(&self) -> &CommandFrames {
        &self.frames
    }

    fn into_frames(self) -> CommandFrames {
        self.frames
    }

    /// Space-joined asserted flag names, only meaningful while no power
    /// condition is requested.
    fn summarize(&self) -> Option<String> {
        if self.power_condition != 0 || self.power_condition_modifier != 0 {
            return None;
        }
        let mut bits = Vec::new();
        if self.load_eject {
            bits.push("load_eject");
        }
        if self.start {
            bits.push("start");
        }
        Some(bits.join(" "))
    }
}
