// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! The full decoding pipeline for one logical stream: recognizer in front,
//! correlator behind, events out.

use tracing::warn;

use crate::{
    cfg::config::Config,
    handlers::recognize::recognize,
    models::transaction::UsbTransaction,
    state_machine::{
        bulk_states::{Correlator, Event},
        common::StateMachine,
    },
};

/// Payload bytes echoed into drop diagnostics when no config says otherwise.
const DEFAULT_CAPTURE_PAYLOAD_BYTES: usize = 16;

/// Decodes one ordered transaction stream into typed events.
///
/// Feed transactions in bus order; interleaved endpoint pairs belong in
/// separate pipelines, routed by the embedding dispatcher.
#[derive(Debug)]
pub struct BulkPipeline {
    correlator: Correlator,
    capture_payload_bytes: usize,
}

impl BulkPipeline {
    pub fn new() -> Self {
        Self {
            correlator: Correlator::new(),
            capture_payload_bytes: DEFAULT_CAPTURE_PAYLOAD_BYTES,
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            correlator: Correlator::with_runtime(&config.runtime),
            capture_payload_bytes: config.runtime.capture_payload_bytes,
        }
    }

    /// Advance the pipeline by one transaction. Emitted events come back in
    /// the exact order they were decided.
    pub fn feed(&mut self, transaction: UsbTransaction) -> Vec<Event> {
        // kept aside before the transaction is consumed, for diagnostics
        let head = transaction
            .payload
            .slice(..transaction.payload.len().min(self.capture_payload_bytes));

        match recognize(transaction) {
            Ok(frame) => self.correlator.feed(frame),
            Err(err) => {
                warn!(
                    %err,
                    payload_head = %hex::encode(&head),
                    "dropping transaction with unparseable wrapper"
                );
                vec![Event::Anomaly(err)]
            },
        }
    }

    /// Drain an ordered transaction stream, one `emit` call per event.
    pub fn run<I, F>(&mut self, transactions: I, mut emit: F)
    where
        I: IntoIterator<Item = UsbTransaction>,
        F: FnMut(Event),
    {
        for transaction in transactions {
            for event in self.feed(transaction) {
                emit(event);
            }
        }
    }
}

impl Default for BulkPipeline {
    fn default() -> Self {
        Self::new()
    }
}
