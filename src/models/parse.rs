// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use enum_dispatch::enum_dispatch;

use crate::{
    control_block::{
        inquiry::Inquiry, mod_sense::ModeSense6,
        prevent_allow_removal::PreventAllowMediumRemoval, read::Read10,
        read_capacity::ReadCapacity10, request_sense::RequestSense,
        start_stop_unit::StartStopUnit, test_unit_ready::TestUnitReady,
        unknown::UnknownCommand,
    },
    models::{common::{BulkCommand, CommandFrames}, error::DecodeError, opcode::ScsiOpcode},
};

/// One fully correlated SCSI command, typed by opcode.
#[enum_dispatch(BulkCommand)]
#[derive(Debug)]
pub enum ScsiCommand {
    TestUnitReady(TestUnitReady),
    RequestSense(RequestSense),
    Inquiry(Inquiry),
    ModeSense6(ModeSense6),
    StartStopUnit(StartStopUnit),
    PreventAllowMediumRemoval(PreventAllowMediumRemoval),
    ReadCapacity10(ReadCapacity10),
    Read10(Read10),
    Unknown(UnknownCommand),
}

impl ScsiCommand {
    /// Dispatch a closed correlation to its command-specific parser.
    ///
    /// The table is a static match over CDB byte 0; opcodes outside it
    /// resolve to [`UnknownCommand`], which records the raw opcode and keeps
    /// the accumulated transactions uninterpreted.
    pub fn from_frames(frames: CommandFrames) -> Result<Self, DecodeError> {
        let raw = frames.opcode()?;
        match ScsiOpcode::from_u8(raw) {
            Some(ScsiOpcode::TestUnitReady) => {
                Ok(Self::TestUnitReady(TestUnitReady::from_frames(frames)?))
            },
            Some(ScsiOpcode::RequestSense) => {
                Ok(Self::RequestSense(RequestSense::from_frames(frames)?))
            },
            Some(ScsiOpcode::Inquiry) => Ok(Self::Inquiry(Inquiry::from_frames(frames)?)),
            Some(ScsiOpcode::ModeSense6) => {
                Ok(Self::ModeSense6(ModeSense6::from_frames(frames)?))
            },
            Some(ScsiOpcode::StartStopUnit) => {
                Ok(Self::StartStopUnit(StartStopUnit::from_frames(frames)?))
            },
            Some(ScsiOpcode::PreventAllowMediumRemoval) => Ok(
                Self::PreventAllowMediumRemoval(PreventAllowMediumRemoval::from_frames(
                    frames,
                )?),
            ),
            Some(ScsiOpcode::ReadCapacity10) => {
                Ok(Self::ReadCapacity10(ReadCapacity10::from_frames(frames)?))
            },
            Some(ScsiOpcode::Read10) => Ok(Self::Read10(Read10::from_frames(frames)?)),
            None => Ok(Self::Unknown(UnknownCommand::from_frames(raw, frames))),
        }
    }
}
