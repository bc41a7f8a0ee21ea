use zerocopy::{
    FromBytes, Immutable, KnownLayout,
    byteorder::{LittleEndian, U32},
};

use crate::models::{
    error::DecodeError,
    transaction::UsbTransaction,
    wrapper::common::{CSW_SIGNATURE, CswStatus},
};

/// Fixed 13-byte CSW layout (USB MSC Bulk-Only Transport § 5.2).
#[repr(C)]
#[derive(FromBytes, KnownLayout, Immutable, Debug)]
pub struct CswRaw {
    /// "USBS" (bytes 0..4).
    pub signature: [u8; 4],
    /// Tag echoed from the CBW this status closes (bytes 4..8).
    pub tag: U32<LittleEndian>,
    /// Bytes the device did not transfer (bytes 8..12).
    pub data_residue: U32<LittleEndian>,
    /// Completion status (byte 12).
    pub status: u8,
}

/// Device-to-host envelope closing one Bulk-Only command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStatusWrapper {
    pub tag: u32,
    pub data_residue: u32,
    pub status: CswStatus,
    /// The transaction this wrapper was recognized in.
    pub transaction: UsbTransaction,
}

impl CommandStatusWrapper {
    pub const LEN: usize = 13;

    /// Decode a CSW out of `transaction`'s payload (signature already
    /// matched by the caller).
    pub fn parse(transaction: UsbTransaction) -> Result<Self, DecodeError> {
        let (raw, _rest) = CswRaw::ref_from_prefix(&transaction.payload).map_err(|_| {
            DecodeError::TruncatedPayload {
                what: "CSW",
                need: Self::LEN,
                got: transaction.payload.len(),
            }
        })?;

        let tag = raw.tag.get();
        let data_residue = raw.data_residue.get();
        let status = CswStatus::from_u8(raw.status);

        Ok(Self {
            tag,
            data_residue,
            status,
            transaction,
        })
    }

    /// Re-encode the wrapper into its 13 wire bytes.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut buf = [0u8; Self::LEN];
        buf[0..4].copy_from_slice(&CSW_SIGNATURE);
        buf[4..8].copy_from_slice(&self.tag.to_le_bytes());
        buf[8..12].copy_from_slice(&self.data_residue.to_le_bytes());
        buf[12] = self.status.as_u8();
        buf
    }

    pub fn summarize(&self) -> String {
        format!("tag {} reply {}", self.tag, self.status)
    }
}
