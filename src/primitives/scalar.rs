/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Portable implementations of the chunk primitives.
//!
//! These run on every target and serve as the reference the vector
//! paths are checked against: a frame produced here is byte-identical
//! to one produced with the intrinsics.

use crate::chunk::{Chunk, CHUNK_LANES};
use crate::primitives::tables::SCATTER;

/// Split a chunk into its 64-bit little-endian lanes.
#[inline(always)]
pub(crate) fn lanes(chunk: &Chunk) -> [u64; CHUNK_LANES] {
    let mut lanes = [0u64; CHUNK_LANES];
    for (lane, bytes) in lanes.iter_mut().zip(chunk.chunks_exact(8)) {
        *lane = u64::from_le_bytes(bytes.try_into().unwrap());
    }
    lanes
}

/// Count the set bits of a chunk.
#[inline(always)]
pub(crate) fn popcount(chunk: &Chunk) -> usize {
    lanes(chunk)
        .iter()
        .map(|lane| lane.count_ones() as usize)
        .sum()
}

/// Write the positions of the set bits of `chunk` into `dst`,
/// ascending, and return how many were written.
///
/// Exactly `popcount(chunk)` bytes are stored, so no trailing slack is
/// needed on this path.
pub(crate) fn compact_positions(chunk: &Chunk, dst: &mut [u8]) -> usize {
    let mut written = 0;
    for (lane_index, lane) in lanes(chunk).into_iter().enumerate() {
        let base = (lane_index * 64) as u8;
        let mut rest = lane;
        while rest != 0 {
            dst[written] = base + rest.trailing_zeros() as u8;
            written += 1;
            rest &= rest - 1;
        }
    }
    written
}

/// Overwrite `dst` with the chunk whose set bits are exactly
/// `positions`.
pub(crate) fn scatter_positions(positions: &[u8], dst: &mut Chunk) {
    let mut accumulator = [0u64; CHUNK_LANES];
    for &position in positions {
        let entry = &SCATTER.0[position as usize];
        for (lane, mask) in accumulator.iter_mut().zip(entry) {
            *lane |= mask;
        }
    }
    store_lanes(accumulator, dst);
}

/// Store the complement of `src` into `dst`.
#[inline]
pub(crate) fn invert_into(src: &Chunk, dst: &mut Chunk) {
    for (dst, src) in dst.iter_mut().zip(src) {
        *dst = !src;
    }
}

/// Complement a chunk in place.
#[inline]
pub(crate) fn invert_in_place(chunk: &mut Chunk) {
    for byte in chunk.iter_mut() {
        *byte = !*byte;
    }
}

#[inline(always)]
fn store_lanes(lanes: [u64; CHUNK_LANES], dst: &mut Chunk) {
    for (bytes, lane) in dst.chunks_exact_mut(8).zip(lanes) {
        bytes.copy_from_slice(&lane.to_le_bytes());
    }
}
