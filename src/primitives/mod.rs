/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The four data-parallel primitives the codec is built on: population
//! count, byte compaction of set-bit positions, table-driven bit
//! scatter, and 256-bit inversion.
//!
//! Compaction and scatter dispatch at runtime to AVX-512VBMI2 and AVX2
//! paths when the host supports them. Population count and inversion
//! stay portable: four `u64` lanes already compile to the widest
//! useful instructions. Every path emits byte-identical frames.

pub(crate) mod scalar;
pub(crate) mod tables;
#[cfg(target_arch = "x86_64")]
mod x86_64;

use crate::chunk::{Chunk, CHUNK_BYTES};

pub(crate) use scalar::{invert_in_place, invert_into, popcount};

/// How far past the last valid byte a compaction store may reach.
///
/// The vector path stores 32 bytes per lane while advancing only by
/// the lane popcount, so the destination must stay writable for one
/// extra chunk beyond the final position. Output buffers reserve this
/// slack past the worst-case frame.
pub(crate) const COMPACT_TAIL_SLACK: usize = CHUNK_BYTES;

/// Write the positions of the set bits of `chunk` into `dst`,
/// ascending, and return how many were written.
///
/// `chunk` must have fewer than 32 set bits, and `dst` must be at
/// least `popcount(chunk) + COMPACT_TAIL_SLACK` bytes long; only the
/// returned prefix is meaningful afterwards.
#[inline]
pub(crate) fn compact_positions(chunk: &Chunk, dst: &mut [u8]) -> usize {
    debug_assert!(popcount(chunk) < CHUNK_BYTES);
    debug_assert!(dst.len() >= popcount(chunk) + COMPACT_TAIL_SLACK);
    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("avx512bw") && is_x86_feature_detected!("avx512vbmi2") {
        return unsafe { x86_64::compact_positions(chunk, dst.as_mut_ptr()) };
    }
    scalar::compact_positions(chunk, dst)
}

/// Overwrite `dst` with the chunk whose set bits are exactly
/// `positions`.
#[inline]
pub(crate) fn scatter_positions(positions: &[u8], dst: &mut Chunk) {
    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("avx2") {
        return unsafe { x86_64::scatter_positions(positions, dst) };
    }
    scalar::scatter_positions(positions, dst)
}
