// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! INQUIRY — 6-byte CDB plus a device-to-host data phase (SPC):
//!
//!   [0] = 0x12 (INQUIRY)
//!   [1] = EVPD/DESC (bit 0)
//!   [2] = PAGE CODE
//!   [3]..[4] = ALLOCATION LENGTH (byte 4 on the devices this decoder sees)
//!   [5] = CONTROL
//!
//! Devices probed mid-error answer the data phase with their current sense
//! state, so the response buffer is decoded with the sense-data offsets.

use crate::{
    control_block::common::{CdbHeader, parse_sense_exchange},
    models::{
        common::{BulkCommand, CommandFrames},
        data::sense_data::SenseData,
        error::DecodeError,
        opcode::ScsiOpcode,
    },
};

#[derive(Debug)]
pub struct Inquiry {
    pub header: CdbHeader,
    pub sense: SenseData,
    frames: CommandFrames,
}

impl Inquiry {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let (header, sense) = parse_sense_exchange(&frames, "INQUIRY")?;
        Ok(Self {
            header,
            sense,
            frames,
        })
    }
}

impl BulkCommand for Inquiry {
    fn opcode(&self) -> u8 {
        ScsiOpcode::Inquiry as u8
    }

    fn frames(&self) -> &CommandFrames {
        &self.frames
    }

    fn into_frames(self) -> CommandFrames {
        self.frames
    }

    fn summarize(&self) -> Option<String> {
        Some(self.sense.describe())
    }
}
