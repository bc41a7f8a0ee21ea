// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! The Bulk-Only command correlator.
//!
//! A command's lifetime spans two or three independent transactions: the
//! CBW opening it, optional data-phase traffic, and the CSW closing it,
//! matched by the tag the host chose. This machine accumulates everything
//! between the wrappers and hands the closed correlation to the opcode
//! dispatch.

use std::mem;

use tracing::{debug, warn};

use crate::{
    cfg::config::RuntimeConfig,
    models::{
        common::CommandFrames,
        error::DecodeError,
        parse::ScsiCommand,
        transaction::UsbTransaction,
        wrapper::{request::CommandBlockWrapper, response::CommandStatusWrapper},
    },
    state_machine::common::{StateMachine, Transition},
};

/// One recognized frame entering the correlator.
#[derive(Debug)]
pub enum BulkFrame {
    /// A Command Block Wrapper.
    Command(CommandBlockWrapper),
    /// A Command Status Wrapper.
    Status(CommandStatusWrapper),
    /// Anything else on the stream.
    Other(UsbTransaction),
}

/// Item emitted toward the consumer, in decision order.
#[derive(Debug)]
pub enum Event {
    /// A fully correlated, typed SCSI command.
    Command(Box<ScsiCommand>),
    /// A status wrapper that closed no open command.
    OrphanStatus(CommandStatusWrapper),
    /// A transaction belonging to no open command, forwarded unchanged.
    Passthrough(UsbTransaction),
    /// Malformed or mismatched input that was dropped; decoding continued.
    Anomaly(DecodeError),
}

#[derive(Debug, Default)]
enum BulkState {
    /// No command in flight.
    #[default]
    Idle,
    /// CBW seen; collecting transactions until the matching CSW.
    AwaitingStatus {
        tag: u32,
        cbw: CommandBlockWrapper,
        data: Vec<UsbTransaction>,
    },
}

/// Correlates one logical stream. The embedding dispatcher owns one
/// correlator per endpoint pair; there is no cross-stream state here.
#[derive(Debug)]
pub struct Correlator {
    state: BulkState,
    warn_pending_frames: Option<usize>,
}

impl Correlator {
    pub fn new() -> Self {
        Self {
            state: BulkState::Idle,
            warn_pending_frames: None,
        }
    }

    pub fn with_runtime(runtime: &RuntimeConfig) -> Self {
        Self {
            state: BulkState::Idle,
            warn_pending_frames: runtime.warn_pending_frames,
        }
    }

    /// True while a CBW is open and unanswered.
    pub fn is_awaiting_status(&self) -> bool {
        matches!(self.state, BulkState::AwaitingStatus { .. })
    }

    fn on_frame(
        &self,
        state: BulkState,
        frame: BulkFrame,
    ) -> Transition<BulkState, Vec<Event>> {
        match (state, frame) {
            (BulkState::Idle, BulkFrame::Command(cbw)) => {
                debug!(tag = cbw.tag, lun = cbw.lun, "bulk command opened");
                Transition::Next(
                    BulkState::AwaitingStatus {
                        tag: cbw.tag,
                        cbw,
                        data: Vec::new(),
                    },
                    Vec::new(),
                )
            },
            (BulkState::Idle, BulkFrame::Status(csw)) => {
                warn!(tag = csw.tag, "status wrapper with no open command");
                Transition::Stay(vec![Event::OrphanStatus(csw)])
            },
            (BulkState::Idle, BulkFrame::Other(txn)) => {
                Transition::Stay(vec![Event::Passthrough(txn)])
            },
            (BulkState::AwaitingStatus { tag, cbw, mut data }, BulkFrame::Other(txn)) => {
                data.push(txn);
                self.note_pending(tag, data.len());
                Transition::Next(BulkState::AwaitingStatus { tag, cbw, data }, Vec::new())
            },
            // A nested CBW cannot open anything while a tag is pending; it is
            // accumulated like any other mid-command transaction.
            (
                BulkState::AwaitingStatus { tag, cbw, mut data },
                BulkFrame::Command(inner),
            ) => {
                data.push(inner.transaction);
                self.note_pending(tag, data.len());
                Transition::Next(BulkState::AwaitingStatus { tag, cbw, data }, Vec::new())
            },
            (BulkState::AwaitingStatus { tag, cbw, data }, BulkFrame::Status(csw)) => {
                let mut events = Vec::new();
                if csw.tag == tag {
                    debug!(tag, status = %csw.status, "bulk command closed");
                } else {
                    // Best-effort close: per-endpoint ordering still pairs
                    // this status with the open command.
                    warn!(
                        expected = tag,
                        got = csw.tag,
                        "status tag does not match open command"
                    );
                    events.push(Event::Anomaly(DecodeError::TagMismatch {
                        expected: tag,
                        got: csw.tag,
                    }));
                }
                let frames = CommandFrames { cbw, data, csw };
                match ScsiCommand::from_frames(frames) {
                    Ok(command) => events.push(Event::Command(Box::new(command))),
                    Err(err) => {
                        warn!(%err, "dropping command that failed to parse");
                        events.push(Event::Anomaly(err));
                    },
                }
                Transition::Next(BulkState::Idle, events)
            },
        }
    }

    fn note_pending(&self, tag: u32, pending: usize) {
        // accumulation is unbounded while a tag stays unanswered; the
        // threshold only makes that visible
        if self.warn_pending_frames == Some(pending) {
            warn!(tag, pending, "open command keeps accumulating transactions");
        }
    }
}

impl Default for Correlator {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine for Correlator {
    type Input = BulkFrame;
    type Output = Vec<Event>;

    fn feed(&mut self, frame: BulkFrame) -> Vec<Event> {
        // The state is taken out so accumulated transactions can move
        // through the transition without cloning.
        let state = mem::take(&mut self.state);
        match self.on_frame(state, frame) {
            Transition::Next(next, events) => {
                self.state = next;
                events
            },
            Transition::Stay(events) => events,
        }
    }
}
