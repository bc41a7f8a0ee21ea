// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! REQUEST SENSE — 6-byte CDB plus a device-to-host data phase (SPC):
//!
//!   [0] = 0x03 (REQUEST SENSE)
//!   [1] = DESC (bit 0), other bits reserved
//!   [2]..[3] = reserved
//!   [4] = ALLOCATION LENGTH (number of sense bytes to return)
//!   [5] = CONTROL
//!
//! The data phase carries the sense data itself; it is decoded bit-exactly
//! in both the fixed and the descriptor layout.

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
pub struct RequestSense {
    pub header: CdbHeader,
    pub sense: SenseData,
    frames: CommandFrames,
}

impl RequestSense {
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let (header, sense) = parse_sense_exchange(&frames, "REQUEST SENSE")?;
        Ok(Self {
            header,
            sense,
            frames,
        })
    }
}

impl BulkCommand for RequestSense {
    fn opcode(&self) -> u8 {
        ScsiOpcode::RequestSense as u8
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
