/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Lookup tables shared by the scalar and vector paths.
//!
//! Both tables are built at compile time and live in read-only data,
//! so they are initialized before any call can observe them.

use crate::chunk::{CHUNK_BITS, CHUNK_LANES};

/// Force 32-byte alignment so each entry can be fetched with a single
/// aligned 256-bit load.
#[repr(C, align(32))]
pub(crate) struct ScatterTable(pub [[u64; CHUNK_LANES]; CHUNK_BITS]);

/// One 256-bit mask per position value: entry `p` has only bit `p`
/// set. An 8 KiB table, OR-accumulated to expand a position list back
/// into a chunk.
pub(crate) static SCATTER: ScatterTable = ScatterTable(build_scatter());

const fn build_scatter() -> [[u64; CHUNK_LANES]; CHUNK_BITS] {
    let mut table = [[0u64; CHUNK_LANES]; CHUNK_BITS];
    let mut position = 0;
    while position < CHUNK_BITS {
        table[position][position / 64] = 1u64 << (position % 64);
        position += 1;
    }
    table
}

#[cfg(target_arch = "x86_64")]
#[repr(C, align(64))]
pub(crate) struct IdentityTable(pub [u8; CHUNK_BITS]);

/// The identity byte permutation, compacted through a lane mask to
/// extract set-bit positions.
#[cfg(target_arch = "x86_64")]
pub(crate) static IDENTITY: IdentityTable = IdentityTable(build_identity());

#[cfg(target_arch = "x86_64")]
const fn build_identity() -> [u8; CHUNK_BITS] {
    let mut table = [0u8; CHUNK_BITS];
    let mut position = 0;
    while position < CHUNK_BITS {
        table[position] = position as u8;
        position += 1;
    }
    table
}
