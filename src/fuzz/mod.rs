/*
 * SPDX-FileCopyrightText: 2026 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Shared harnesses for the fuzz targets in `fuzz/fuzz_targets`.
//!
//! Keeping the logic here lets the targets stay one-liners and makes
//! the harnesses runnable as ordinary tests.

use arbitrary::Arbitrary;

use crate::chunk::{split_header, CHUNK_BYTES, FRAME_PREFIX_BYTES};

/// An input buffer, capped at 1 MiB so a single case stays fast.
#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    data: Vec<u8>,
}

const MAX_LEN: usize = 1 << 20;

/// Compress, decompress, and check every frame-level invariant.
pub fn harness(case: FuzzCase) {
    let mut data = case.data;
    data.truncate(MAX_LEN);

    let frame = crate::compress_to_vec(&data).unwrap();

    // The prefix is the unpadded length.
    assert_eq!(
        u32::from_le_bytes(frame[..FRAME_PREFIX_BYTES].try_into().unwrap()) as usize,
        data.len()
    );

    // The frame is exactly the prefix plus the sum of its records.
    let mut cursor = FRAME_PREFIX_BYTES;
    let mut records = 0;
    while cursor < frame.len() {
        let (_, len) = split_header(frame[cursor]);
        assert!(1 + len <= 1 + CHUNK_BYTES);
        cursor += 1 + len;
        records += 1;
    }
    assert_eq!(cursor, frame.len());
    assert_eq!(records, data.len().div_ceil(CHUNK_BYTES));

    // Round trip: the decoded buffer is the zero-padded input.
    let decoded = crate::decompress_to_vec(&frame).unwrap();
    assert_eq!(decoded.len(), data.len().div_ceil(CHUNK_BYTES) * CHUNK_BYTES);
    assert_eq!(&decoded[..data.len()], &data[..]);
    assert!(decoded[data.len()..].iter().all(|&b| b == 0));
}

/// Feed arbitrary bytes to the decoder; it must reject or decode,
/// never panic.
pub fn harness_decompress(frame: &[u8]) {
    match crate::peek_decoded_size(frame) {
        Err(_) => {}
        Ok((_, buffer_size)) if buffer_size > MAX_LEN => {}
        Ok(_) => {
            let _ = crate::decompress_to_vec(frame);
        }
    }
}
