/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Vector implementations of the chunk primitives for x86-64.
//!
//! The callers in [`super`] select these at runtime with
//! `is_x86_feature_detected!` and otherwise fall back to the scalar
//! module, which produces byte-identical output.

use core::arch::x86_64::*;

use crate::chunk::Chunk;
use crate::primitives::scalar;
use crate::primitives::tables::{IDENTITY, SCATTER};

/// Write the positions of the set bits of `chunk` at `dst`, ascending,
/// and return how many are valid.
///
/// Each 64-bit lane is used as a compaction mask over the identity
/// byte permutation, and the compacted vector is stored 32 bytes wide
/// regardless of how many of those bytes are valid; the cursor then
/// advances by the lane popcount, so the next store overwrites the
/// garbage tail. All positions of a lane fit the 32-byte store because
/// the caller only compacts chunks with fewer than 32 relevant bits.
///
/// # Safety
///
/// Requires AVX-512BW and AVX-512VBMI2. `dst` must be valid for writes
/// of `popcount(chunk) + 32` bytes, and `popcount(chunk)` must be less
/// than 32.
#[target_feature(enable = "avx512f,avx512bw,avx512vbmi2")]
pub(crate) unsafe fn compact_positions(chunk: &Chunk, dst: *mut u8) -> usize {
    debug_assert!(scalar::popcount(chunk) < 32);
    let mut cursor = dst;
    for (lane_index, lane) in scalar::lanes(chunk).into_iter().enumerate() {
        let indices = _mm512_loadu_si512(IDENTITY.0.as_ptr().add(lane_index * 64).cast());
        let compacted = _mm512_maskz_compress_epi8(lane, indices);
        _mm256_storeu_si256(cursor.cast(), _mm512_castsi512_si256(compacted));
        cursor = cursor.add(lane.count_ones() as usize);
    }
    cursor.offset_from(dst) as usize
}

/// Overwrite `dst` with the chunk whose set bits are exactly
/// `positions`, OR-accumulating one table mask per position.
///
/// # Safety
///
/// Requires AVX2.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn scatter_positions(positions: &[u8], dst: &mut Chunk) {
    let mut accumulator = _mm256_setzero_si256();

    // Unrolling by four keeps the OR chain out of the load shadow.
    let mut quads = positions.chunks_exact(4);
    for quad in &mut quads {
        let mask_0 = _mm256_load_si256(SCATTER.0[quad[0] as usize].as_ptr().cast());
        let mask_1 = _mm256_load_si256(SCATTER.0[quad[1] as usize].as_ptr().cast());
        let mask_2 = _mm256_load_si256(SCATTER.0[quad[2] as usize].as_ptr().cast());
        let mask_3 = _mm256_load_si256(SCATTER.0[quad[3] as usize].as_ptr().cast());
        accumulator = _mm256_or_si256(accumulator, mask_0);
        accumulator = _mm256_or_si256(accumulator, mask_1);
        accumulator = _mm256_or_si256(accumulator, mask_2);
        accumulator = _mm256_or_si256(accumulator, mask_3);
    }
    for &position in quads.remainder() {
        let mask = _mm256_load_si256(SCATTER.0[position as usize].as_ptr().cast());
        accumulator = _mm256_or_si256(accumulator, mask);
    }

    _mm256_storeu_si256(dst.as_mut_ptr().cast(), accumulator);
}
