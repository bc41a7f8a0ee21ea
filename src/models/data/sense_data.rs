use std::fmt;

use crate::models::{data::AdditionalSense, error::DecodeError};

/// Response codes announcing *fixed-format* sense data (SPC-4 § 4.5.3).
/// Everything else is treated as the descriptor-format layout.
const FIXED_CURRENT: u8 = 0x70;
const FIXED_DEFERRED: u8 = 0x71;

/// Fixed format keeps the ASC/ASCQ pair at bytes 12/13.
const FIXED_MIN_LEN: usize = 14;
/// Descriptor format keeps sense key and ASC/ASCQ in the first 4 bytes.
const DESCRIPTOR_MIN_LEN: usize = 4;

/// Sense-key names, indexed by the 4-bit sense key (SPC-4 Table 41).
pub const SENSE_KEYS: [&str; 16] = [
    "NO SENSE",
    "RECOVERED ERROR",
    "NOT READY",
    "MEDIUM ERROR",
    "HARDWARE ERROR",
    "ILLEGAL REQUEST",
    "UNIT ATTENTION",
    "DATA PROTECT",
    "BLANK CHECK",
    "VENDOR SPECIFIC",
    "COPY ABORTED",
    "ABORTED COMMAND",
    "Reserved",
    "VOLUME OVERFLOW",
    "MISCOMPARE",
    "COMPLETED",
];

/// Decoded SCSI sense data, reduced to the fields a traffic inspector
/// renders: who failed (`sense_key`) and why (`asc`/`ascq`).
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct SenseData {
    /// Low 7 bits of byte 0.
    pub response_code: u8,
    /// 4-bit sense key, indexes [`SENSE_KEYS`].
    pub sense_key: u8,
    /// Additional Sense Code.
    pub asc: u8,
    /// Additional Sense Code Qualifier.
    pub ascq: u8,
}

impl SenseData {
    /// Parse sense data from a data-phase payload.
    ///
    /// Fixed format (response codes 0x70/0x71) reads the sense key from
    /// byte 2 and ASC/ASCQ from bytes 12/13; any other response code uses
    /// the descriptor-format offsets 1/2/3.
    pub fn parse(buf: &[u8]) -> Result<Self, DecodeError> {
        let first = buf.first().ok_or_else(|| DecodeError::MalformedCommand {
            what: "sense data",
            reason: "empty data-phase payload".to_string(),
        })?;
        let response_code = first & 0x7F;

        if matches!(response_code, FIXED_CURRENT | FIXED_DEFERRED) {
            if buf.len() < FIXED_MIN_LEN {
                return Err(DecodeError::MalformedCommand {
                    what: "sense data",
                    reason: format!(
                        "fixed-format buffer too small: {} < {FIXED_MIN_LEN}",
                        buf.len()
                    ),
                });
            }
            Ok(Self {
                response_code,
                sense_key: buf[2] & 0x0F,
                asc: buf[12],
                ascq: buf[13],
            })
        } else {
            if buf.len() < DESCRIPTOR_MIN_LEN {
                return Err(DecodeError::MalformedCommand {
                    what: "sense data",
                    reason: format!(
                        "descriptor-format buffer too small: {} < {DESCRIPTOR_MIN_LEN}",
                        buf.len()
                    ),
                });
            }
            Ok(Self {
                response_code,
                sense_key: buf[1] & 0x0F,
                asc: buf[2],
                ascq: buf[3],
            })
        }
    }

    #[inline]
    pub fn sense_key_name(&self) -> &'static str {
        SENSE_KEYS[(self.sense_key & 0x0F) as usize]
    }

    /// "sense-key name" + additional-sense description, with the raw pair
    /// rendered as hex when the table has no entry.
    pub fn describe(&self) -> String {
        match AdditionalSense::lookup(self.asc, self.ascq) {
            Some(desc) => format!("{} {desc}", self.sense_key_name()),
            None => format!(
                "{} ({:02x}, {:02x})",
                self.sense_key_name(),
                self.asc,
                self.ascq
            ),
        }
    }
}

impl fmt::Debug for SenseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SenseData")
            .field(
                "response_code",
                &format_args!("{:#04x}", self.response_code),
            )
            .field("sense_key", &self.sense_key_name())
            .field("asc", &format_args!("{:#04x}", self.asc))
            .field("ascq", &format_args!("{:#04x}", self.ascq))
            .field("description", &self.describe())
            .finish()
    }
}
