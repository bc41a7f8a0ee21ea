// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Signature-based recognition of Bulk-Only Transport wrappers.

use crate::{
    models::{
        error::DecodeError,
        transaction::UsbTransaction,
        wrapper::{
            common::{CBW_SIGNATURE, CSW_SIGNATURE},
            request::CommandBlockWrapper,
            response::CommandStatusWrapper,
        },
    },
    state_machine::bulk_states::BulkFrame,
};

/// Classify one raw transaction by its leading wrapper signature.
///
/// Transactions with an empty payload or no signature are handed back as
/// [`BulkFrame::Other`]. A matching signature over a bad layout is a decode
/// error: the caller reports it and drops the transaction, and the stream
/// keeps flowing.
pub fn recognize(transaction: UsbTransaction) -> Result<BulkFrame, DecodeError> {
    if transaction.payload.starts_with(&CBW_SIGNATURE) {
        Ok(BulkFrame::Command(CommandBlockWrapper::parse(transaction)?))
    } else if transaction.payload.starts_with(&CSW_SIGNATURE) {
        Ok(BulkFrame::Status(CommandStatusWrapper::parse(transaction)?))
    } else {
        Ok(BulkFrame::Other(transaction))
    }
}
