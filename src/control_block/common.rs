use crate::models::{
    common::CommandFrames, data::sense_data::SenseData, error::DecodeError,
};

/// Fields shared by the 6-byte CDBs this decoder interprets (SPC):
///
///   [0] = OPERATION CODE
///   [1] = DESC (bit 0), other bits reserved
///   [2]..[3] = command specific
///   [4] = ALLOCATION LENGTH
///   [5] = CONTROL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdbHeader {
    /// DESC bit: descriptor-format data requested.
    pub descriptor_format: bool,
    pub allocation_length: u8,
    pub control: u8,
}

impl CdbHeader {
    pub const CDB_LEN: usize = 6;

    pub fn parse(cdb: &[u8]) -> Result<Self, DecodeError> {
        if cdb.len() < Self::CDB_LEN {
            return Err(DecodeError::TruncatedPayload {
                what: "6-byte CDB",
                need: Self::CDB_LEN,
                got: cdb.len(),
            });
        }
        Ok(Self {
            descriptor_format: cdb[1] & 0x01 != 0,
            allocation_length: cdb[4],
            control: cdb[5],
        })
    }
}

/// Shared decode path for commands whose data phase carries sense data
/// (REQUEST SENSE, and INQUIRY as captured by mass-storage devices that
/// answer probes with their sense state).
///
/// The data-phase payload is clamped to ALLOCATION LENGTH before the sense
/// offsets are read.
pub fn parse_sense_exchange(
    frames: &CommandFrames,
    what: &'static str,
) -> Result<(CdbHeader, SenseData), DecodeError> {
    let header = CdbHeader::parse(&frames.cbw.command_block)?;
    let payload = frames
        .data_payload()
        .ok_or_else(|| DecodeError::MalformedCommand {
            what,
            reason: "data phase missing, nothing to read sense data from".to_string(),
        })?;
    let len = payload.len().min(header.allocation_length as usize);
    let sense = SenseData::parse(&payload[..len])?;
    Ok((header, sense))
}
