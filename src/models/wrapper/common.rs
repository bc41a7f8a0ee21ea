use std::fmt;

use bitflags::bitflags;

/// Magic bytes opening every Command Block Wrapper ("USBC").
pub const CBW_SIGNATURE: [u8; 4] = [0x55, 0x53, 0x42, 0x43];
/// Magic bytes opening every Command Status Wrapper ("USBS").
pub const CSW_SIGNATURE: [u8; 4] = [0x55, 0x53, 0x42, 0x53];

bitflags! {
    /// CBW `bmCBWFlags` byte (USB MSC BOT § 5.1).
    ///
    /// Bits 6..0 are reserved/obsolete; they are preserved verbatim rather
    /// than rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CbwFlags: u8 {
        /// Data-phase direction: set = device-to-host (IN).
        const DIRECTION = 1 << 7;
    }
}

impl CbwFlags {
    /// True when the data phase, if any, runs device-to-host.
    #[inline]
    pub const fn is_in(&self) -> bool {
        self.contains(CbwFlags::DIRECTION)
    }
}

/// `bCSWStatus` byte closing a Bulk-Only command (BOT § 5.2).
///
/// Values outside the defined set are preserved raw instead of rejected, so
/// a device speaking a newer (or broken) dialect still correlates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CswStatus {
    Passed,
    Failed,
    PhaseError,
    Unknown(u8),
}

impl CswStatus {
    #[inline]
    pub const fn from_u8(v: u8) -> Self {
        match v {
            0x00 => Self::Passed,
            0x01 => Self::Failed,
            0x02 => Self::PhaseError,
            other => Self::Unknown(other),
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Passed => 0x00,
            Self::Failed => 0x01,
            Self::PhaseError => 0x02,
            Self::Unknown(raw) => *raw,
        }
    }
}

impl fmt::Display for CswStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
            Self::PhaseError => write!(f, "phase error"),
            Self::Unknown(raw) => write!(f, "unknown status {raw}"),
        }
    }
}
