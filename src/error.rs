/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error types returned by the codec.
//!
//! Every failure is surfaced to the caller. Nothing is retried and
//! nothing is silently truncated. After an [`Error::InputTooLarge`]
//! rejection the compressor is untouched and remains usable; after an
//! [`Error::CorruptStream`] the partially filled output buffer must be
//! discarded.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Buffer allocation failed while creating a compressor.
    #[error("allocation of {0} bytes failed")]
    AllocationFailed(usize),

    /// The declared input size exceeds the capacity the compressor was
    /// created with.
    #[error("input of {got} bytes exceeds the compressor capacity of {max} bytes")]
    InputTooLarge { got: usize, max: usize },

    /// The caller's decode buffer is smaller than the size reported by
    /// [`peek_decoded_size`](crate::peek_decoded_size).
    #[error("output buffer of {got} bytes is smaller than the {needed} bytes required")]
    OutputTooSmall { got: usize, needed: usize },

    /// The compressed frame is malformed.
    #[error("corrupt compressed stream: {0}")]
    CorruptStream(#[from] CorruptKind),
}

/// The exact way a compressed frame failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptKind {
    /// The frame is shorter than the 4-byte length prefix.
    #[error("frame shorter than the length prefix")]
    MissingPrefix,

    /// A record header carries the reserved category tag.
    #[error("reserved record category at offset {0}")]
    ReservedCategory(usize),

    /// A raw record whose length field is not exactly one chunk.
    #[error("raw record of {len} bytes at offset {offset}")]
    BadRawLength { offset: usize, len: usize },

    /// A position-list record longer than any conforming encoder emits.
    #[error("position list of {len} entries at offset {offset}")]
    BadListLength { offset: usize, len: usize },

    /// A record header promises more payload than the frame holds.
    #[error("record needs {needed} payload bytes but only {remaining} remain")]
    TruncatedPayload { needed: usize, remaining: usize },

    /// The records do not add up to the chunk count implied by the
    /// length prefix.
    #[error("frame holds {got} chunk records but the prefix implies {expected}")]
    ChunkCountMismatch { got: usize, expected: usize },
}
