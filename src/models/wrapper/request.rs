// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use bytes::Bytes;
use zerocopy::{
    FromBytes, Immutable, KnownLayout,
    byteorder::{LittleEndian, U32},
};

use crate::models::{
    error::DecodeError,
    transaction::{Direction, UsbTransaction},
    wrapper::common::{CBW_SIGNATURE, CbwFlags},
};

/// Fixed 15-byte CBW header (USB MSC Bulk-Only Transport § 5.1).
///
/// Unlike SCSI CDB fields, the wrapper integers are **little-endian**.
#[repr(C)]
#[derive(FromBytes, KnownLayout, Immutable, Debug)]
pub struct CbwRaw {
    /// "USBC" (bytes 0..4).
    pub signature: [u8; 4],
    /// Host-chosen correlation tag, echoed by the device (bytes 4..8).
    pub tag: U32<LittleEndian>,
    /// Expected data-phase length in bytes (bytes 8..12).
    pub data_transfer_length: U32<LittleEndian>,
    /// Direction flag byte (byte 12).
    pub flags: u8,
    /// Logical unit number (byte 13).
    pub lun: u8,
    /// Length of the embedded CDB (byte 14).
    pub cb_length: u8,
}

/// Host-to-device envelope opening one Bulk-Only command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlockWrapper {
    pub tag: u32,
    pub data_transfer_length: u32,
    pub flags: CbwFlags,
    pub lun: u8,
    /// Embedded SCSI CDB, truncated to the bytes actually captured.
    pub command_block: Bytes,
    /// The transaction this wrapper was recognized in.
    pub transaction: UsbTransaction,
}

impl CommandBlockWrapper {
    pub const HEADER_LEN: usize = 15;

    /// Decode a CBW out of `transaction`'s payload.
    ///
    /// The caller has already matched the signature; this only enforces the
    /// layout. The CDB length byte may claim more bytes than the payload
    /// carries — the command block is clamped to what is present.
    pub fn parse(transaction: UsbTransaction) -> Result<Self, DecodeError> {
        let (raw, rest) = CbwRaw::ref_from_prefix(&transaction.payload).map_err(|_| {
            DecodeError::TruncatedPayload {
                what: "CBW",
                need: Self::HEADER_LEN,
                got: transaction.payload.len(),
            }
        })?;

        let tag = raw.tag.get();
        let data_transfer_length = raw.data_transfer_length.get();
        let flags = CbwFlags::from_bits_retain(raw.flags);
        let lun = raw.lun;
        let cb_len = (raw.cb_length as usize).min(rest.len());

        let command_block = transaction
            .payload
            .slice(Self::HEADER_LEN..Self::HEADER_LEN + cb_len);

        Ok(Self {
            tag,
            data_transfer_length,
            flags,
            lun,
            command_block,
            transaction,
        })
    }

    /// Re-encode the wrapper (header + CDB) into wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; Self::HEADER_LEN + self.command_block.len()];
        buf[0..4].copy_from_slice(&CBW_SIGNATURE);
        buf[4..8].copy_from_slice(&self.tag.to_le_bytes());
        buf[8..12].copy_from_slice(&self.data_transfer_length.to_le_bytes());
        buf[12] = self.flags.bits();
        buf[13] = self.lun;
        buf[14] = self.command_block.len() as u8;
        buf[Self::HEADER_LEN..].copy_from_slice(&self.command_block);
        buf
    }

    /// SCSI operation code, when the captured CDB has at least one byte.
    #[inline]
    pub fn opcode(&self) -> Option<u8> {
        self.command_block.first().copied()
    }

    /// Direction of the data phase this wrapper announces.
    #[inline]
    pub const fn data_direction(&self) -> Direction {
        if self.flags.is_in() { Direction::In } else { Direction::Out }
    }

    pub fn summarize(&self) -> String {
        format!(
            "tag {} to lun #{} with length {}",
            self.tag, self.lun, self.data_transfer_length
        )
    }
}
