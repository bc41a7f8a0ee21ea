// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! The raw USB transaction this decoder consumes.
//!
//! A lower layer has already reassembled bus packets into per-transaction
//! byte buffers. Direction, endpoint and completion status are opaque
//! capture metadata: the decoder forwards them with every emitted command
//! and never interprets them.

use bytes::Bytes;

/// Transfer direction, seen from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Host to device.
    Out,
    /// Device to host.
    In,
}

/// Completion status reported by the transfer layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    #[default]
    Completed,
    Stalled,
    Error,
}

/// One reassembled USB transaction, immutable once observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbTransaction {
    /// Raw transfer bytes. `Bytes` keeps the wrapper and CDB slices cheap.
    pub payload: Bytes,
    pub direction: Direction,
    /// Endpoint address as captured, direction bit included.
    pub endpoint: u8,
    /// Capture timestamp in microseconds, when the capture layer has one.
    pub timestamp_us: Option<u64>,
    pub status: TransactionStatus,
}

impl UsbTransaction {
    pub fn new(payload: impl Into<Bytes>, direction: Direction, endpoint: u8) -> Self {
        Self {
            payload: payload.into(),
            direction,
            endpoint,
            timestamp_us: None,
            status: TransactionStatus::default(),
        }
    }

    /// Attach the capture timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp_us: u64) -> Self {
        self.timestamp_us = Some(timestamp_us);
        self
    }

    /// Attach the completion status the transfer layer reported.
    #[must_use]
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }
}
