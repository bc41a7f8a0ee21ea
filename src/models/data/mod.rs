//! SCSI sense-data structures and the additional-sense description table.

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Defines the decoded sense-data structure and sense-key names.
pub mod sense_data;

/// One (ASC, ASCQ) pair with its SPC description.
pub struct AdditionalSense {
    code: u16,
    desc: &'static str,
}

/// The additional-sense pairs mass-storage devices report in practice.
/// Pairs absent here are rendered as raw hex by the caller.
static ADDITIONAL_SENSE: &[AdditionalSense] = &[
    AdditionalSense { code: 0x0000, desc: "No Additional Sense Information" },
    AdditionalSense { code: 0x0400, desc: "Logical Unit Not Ready, Cause Not Reportable" },
    AdditionalSense { code: 0x0401, desc: "Logical Unit Is in Process of Becoming Ready" },
    AdditionalSense { code: 0x2000, desc: "Invalid Command Operation Code" },
    AdditionalSense { code: 0x2100, desc: "Logical Block Address Out of Range" },
    AdditionalSense { code: 0x2400, desc: "Invalid Field in CDB" },
    AdditionalSense { code: 0x2500, desc: "Logical Unit Not Supported" },
    AdditionalSense { code: 0x2800, desc: "Not Ready to Ready Change, Medium May Have Changed" },
    AdditionalSense { code: 0x2900, desc: "Power On, Reset, or Bus Device Reset Occurred" },
    AdditionalSense { code: 0x3A00, desc: "Media Not Present" },
    AdditionalSense { code: 0x3A01, desc: "Medium Not Present - Tray Closed" },
    AdditionalSense { code: 0x3A02, desc: "Medium Not Present - Tray Open" },
];

static ADDITIONAL_SENSE_MAP: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    let mut m: HashMap<u16, &'static str> =
        HashMap::with_capacity(ADDITIONAL_SENSE.len());
    for e in ADDITIONAL_SENSE {
        m.insert(e.code, e.desc);
    }
    m
});

impl AdditionalSense {
    /// Look up the description for a given ASC/ASCQ pair.
    #[inline]
    pub fn lookup(asc: u8, ascq: u8) -> Option<&'static str> {
        let k = ((asc as u16) << 8) | (ascq as u16);
        ADDITIONAL_SENSE_MAP.get(&k).copied()
    }
}
