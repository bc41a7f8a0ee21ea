//! Contains the stream-facing plumbing: wrapper recognition and the
//! per-stream decoding pipeline.

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// The recognizer + correlator composition.
pub mod pipeline;
/// Signature-based CBW/CSW recognition.
pub mod recognize;
