use std::iter;

use bytes::Bytes;
use enum_dispatch::enum_dispatch;

use crate::models::{
    error::DecodeError,
    transaction::UsbTransaction,
    wrapper::{request::CommandBlockWrapper, response::CommandStatusWrapper},
};

/// Every transaction that made up one Bulk-Only command, in bus order.
///
/// The CBW-first / CSW-last ordering every command parser relies on is held
/// by construction. The correlator moves this container out by value at
/// emission time and never touches it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrames {
    pub cbw: CommandBlockWrapper,
    /// Data-phase transactions observed between the wrappers, if any.
    pub data: Vec<UsbTransaction>,
    pub csw: CommandStatusWrapper,
}

impl CommandFrames {
    /// SCSI operation code: byte 0 of the embedded CDB.
    pub fn opcode(&self) -> Result<u8, DecodeError> {
        self.cbw
            .opcode()
            .ok_or_else(|| DecodeError::MalformedCommand {
                what: "command block",
                reason: "empty CDB, no opcode byte".to_string(),
            })
    }

    /// Payload of the first data-phase transaction, when one was captured.
    #[inline]
    pub fn data_payload(&self) -> Option<&Bytes> {
        self.data.first().map(|t| &t.payload)
    }

    /// All underlying transactions: CBW first, CSW last.
    pub fn transactions(&self) -> impl Iterator<Item = &UsbTransaction> {
        iter::once(&self.cbw.transaction)
            .chain(self.data.iter())
            .chain(iter::once(&self.csw.transaction))
    }
}

/// Common surface of every decoded SCSI command variant.
#[enum_dispatch]
pub trait BulkCommand {
    /// SCSI operation code this command was dispatched on.
    fn opcode(&self) -> u8;

    /// The transactions that produced this command.
    fn frames(&self) -> &CommandFrames;

    /// Give up ownership of the underlying transactions.
    fn into_frames(self) -> CommandFrames;

    /// One-line human-readable rendering, when the variant defines one.
    fn summarize(&self) -> Option<String>;

    /// Hex dump of the embedded CDB.
    fn cdb_hex(&self) -> String {
        hex::encode(&self.frames().cbw.command_block)
    }
}
