/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The compression context and the chunk encoder.

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::chunk::{
    classify, header_byte, Category, Chunk, CHUNK_BITS, CHUNK_BYTES, FRAME_PREFIX_BYTES,
    MAX_RECORD_BYTES,
};
use crate::error::{Error, Result};
use crate::primitives::{compact_positions, invert_into, popcount, COMPACT_TAIL_SLACK};

/// A reusable compression context.
///
/// The context owns every buffer a compression pass touches: the
/// zero-initialized input region the caller fills, the output region
/// the frame is encoded into, and a one-chunk scratch area used to
/// invert high-density chunks. Creating it is the only operation that
/// allocates; [`compress`](Compressor::compress) itself is wait-free
/// and allocation-free.
///
/// A context is not shareable: every call mutates its buffers. Distinct
/// contexts are fully independent and may run on different threads.
///
/// ```
/// use bitpress::Compressor;
///
/// let mut compressor = Compressor::new(64).unwrap();
/// compressor.input_mut()[..3].copy_from_slice(&[1, 2, 3]);
/// let frame_len = compressor.compress(3).unwrap();
/// assert_eq!(&compressor.compressed()[..4], &3u32.to_le_bytes());
/// assert_eq!(compressor.compressed().len(), frame_len);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct Compressor {
    /// `chunks * 32` zero-initialized bytes the caller writes into.
    input: Vec<u8>,
    /// Worst-case frame plus one chunk of compaction slack.
    output: Vec<u8>,
    /// Holds the complement of a chunk during dense encoding.
    scratch: Chunk,
    /// Upper bound on the sizes this context accepts, a chunk multiple.
    max_size: usize,
    /// Length of the valid frame prefix of `output`.
    frame_len: usize,
}

impl Compressor {
    /// Create a context for inputs of up to `upper_bound` bytes.
    ///
    /// The bound is rounded up to the next chunk multiple. It must fit
    /// the 32-bit frame prefix, and the two buffers must be
    /// allocatable; otherwise no context is built.
    pub fn new(upper_bound: usize) -> Result<Self> {
        if upper_bound > u32::MAX as usize {
            return Err(Error::InputTooLarge {
                got: upper_bound,
                max: u32::MAX as usize,
            });
        }
        let chunks = upper_bound.div_ceil(CHUNK_BYTES);
        // Saturation turns a 32-bit-host overflow into an allocation
        // failure instead of an undersized buffer.
        let max_size = chunks.saturating_mul(CHUNK_BYTES);
        let output_capacity = chunks
            .saturating_mul(MAX_RECORD_BYTES)
            .saturating_add(FRAME_PREFIX_BYTES + COMPACT_TAIL_SLACK);

        Ok(Self {
            input: zeroed(max_size)?,
            output: zeroed(output_capacity)?,
            scratch: [0; CHUNK_BYTES],
            max_size,
            frame_len: 0,
        })
    }

    /// The largest input size [`compress`](Compressor::compress)
    /// accepts.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The input region, `max_size` bytes long.
    ///
    /// Write the data to compress into its prefix and pass the actual
    /// length to [`compress`](Compressor::compress).
    #[must_use]
    pub fn input_mut(&mut self) -> &mut [u8] {
        &mut self.input
    }

    /// The frame produced by the last
    /// [`compress`](Compressor::compress) call. Empty before the first
    /// call.
    ///
    /// Bytes of the output buffer past this slice are compaction
    /// slack; they are never part of the frame.
    #[must_use]
    pub fn compressed(&self) -> &[u8] {
        &self.output[..self.frame_len]
    }

    /// Encode the first `size` bytes of the input region and return
    /// the frame length.
    ///
    /// The input is padded with zeros up to the next chunk boundary;
    /// the pad bytes are cleared here, so a context can be reused
    /// with a shorter input without scrubbing it first. Fails with
    /// [`Error::InputTooLarge`] if `size` exceeds
    /// [`max_size`](Compressor::max_size), in which case nothing is
    /// written and the context stays usable.
    pub fn compress(&mut self, size: usize) -> Result<usize> {
        if size > self.max_size {
            return Err(Error::InputTooLarge {
                got: size,
                max: self.max_size,
            });
        }
        let chunks = size.div_ceil(CHUNK_BYTES);
        let padded = chunks * CHUNK_BYTES;
        self.input[size..padded].fill(0);

        let Self {
            input,
            output,
            scratch,
            ..
        } = self;

        output[..FRAME_PREFIX_BYTES].copy_from_slice(&(size as u32).to_le_bytes());
        let mut cursor = FRAME_PREFIX_BYTES;

        for chunk in input[..padded].chunks_exact(CHUNK_BYTES) {
            let chunk: &Chunk = chunk.try_into().unwrap();
            let count = popcount(chunk);
            match classify(count) {
                Category::Sparse => {
                    output[cursor] = header_byte(Category::Sparse, count);
                    cursor += 1;
                    cursor += compact_positions(chunk, &mut output[cursor..]);
                }
                Category::Dense => {
                    let clear = CHUNK_BITS - count;
                    output[cursor] = header_byte(Category::Dense, clear);
                    cursor += 1;
                    invert_into(chunk, scratch);
                    cursor += compact_positions(scratch, &mut output[cursor..]);
                }
                Category::Raw => {
                    output[cursor] = header_byte(Category::Raw, CHUNK_BYTES);
                    cursor += 1;
                    output[cursor..cursor + CHUNK_BYTES].copy_from_slice(chunk);
                    cursor += CHUNK_BYTES;
                }
            }
        }

        self.frame_len = cursor;
        Ok(cursor)
    }
}

/// Allocate a zero-filled buffer, reporting failure instead of
/// aborting.
fn zeroed(len: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;
    buffer.resize(len, 0);
    Ok(buffer)
}

/// Compress `data` in one shot, allocating a fresh context.
///
/// ```
/// let frame = bitpress::compress_to_vec(&[0u8; 64]).unwrap();
/// assert_eq!(frame, vec![64, 0, 0, 0, 0x00, 0x00]);
/// ```
pub fn compress_to_vec(data: &[u8]) -> Result<Vec<u8>> {
    let mut compressor = Compressor::new(data.len())?;
    compressor.input_mut()[..data.len()].copy_from_slice(data);
    compressor.compress(data.len())?;
    Ok(compressor.compressed().to_vec())
}
