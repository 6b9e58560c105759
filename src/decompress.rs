/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Frame parsing and the chunk decoder.

use crate::chunk::{split_header, Category, Chunk, CHUNK_BYTES, FRAME_PREFIX_BYTES};
use crate::error::{CorruptKind, Error, Result};
use crate::primitives::{invert_in_place, scatter_positions};

/// Read the frame prefix and return `(data_size, buffer_size)`.
///
/// `data_size` is the unpadded length of the original input;
/// `buffer_size` is the chunk-aligned capacity a buffer passed to
/// [`decompress`] must have. Does not touch the rest of the frame, and
/// repeated calls return the same pair.
///
/// ```
/// let frame = bitpress::compress_to_vec(&[1u8; 40]).unwrap();
/// assert_eq!(bitpress::peek_decoded_size(&frame).unwrap(), (40, 64));
/// ```
pub fn peek_decoded_size(frame: &[u8]) -> Result<(usize, usize)> {
    let prefix = frame
        .get(..FRAME_PREFIX_BYTES)
        .ok_or(CorruptKind::MissingPrefix)?;
    let data_size = u32::from_le_bytes(prefix.try_into().unwrap()) as usize;
    Ok((data_size, data_size.div_ceil(CHUNK_BYTES) * CHUNK_BYTES))
}

/// Decode `frame` into `out`.
///
/// `out` must be at least the `buffer_size` reported by
/// [`peek_decoded_size`]; exactly that many bytes are written, the
/// original data followed by up to 31 bytes of zero padding. On a
/// [`Error::CorruptStream`] the contents of `out` are unspecified and
/// must be discarded.
pub fn decompress(frame: &[u8], out: &mut [u8]) -> Result<()> {
    let (_, buffer_size) = peek_decoded_size(frame)?;
    if out.len() < buffer_size {
        return Err(Error::OutputTooSmall {
            got: out.len(),
            needed: buffer_size,
        });
    }
    let expected_chunks = buffer_size / CHUNK_BYTES;

    let mut cursor = FRAME_PREFIX_BYTES;
    let mut decoded_chunks = 0;
    while cursor < frame.len() {
        let (tag, len) = split_header(frame[cursor]);
        let category = Category::from_tag(tag)
            .ok_or(CorruptKind::ReservedCategory(cursor))?;
        if decoded_chunks == expected_chunks {
            return Err(CorruptKind::ChunkCountMismatch {
                got: decoded_chunks + 1,
                expected: expected_chunks,
            }
            .into());
        }

        let payload = frame
            .get(cursor + 1..cursor + 1 + len)
            .ok_or(CorruptKind::TruncatedPayload {
                needed: len,
                remaining: frame.len() - cursor - 1,
            })?;
        let start = decoded_chunks * CHUNK_BYTES;
        let out_chunk: &mut Chunk = (&mut out[start..start + CHUNK_BYTES]).try_into().unwrap();

        match category {
            Category::Sparse => {
                check_list_len(cursor, len)?;
                scatter_positions(payload, out_chunk);
            }
            Category::Dense => {
                check_list_len(cursor, len)?;
                scatter_positions(payload, out_chunk);
                invert_in_place(out_chunk);
            }
            Category::Raw => {
                if len != CHUNK_BYTES {
                    return Err(CorruptKind::BadRawLength {
                        offset: cursor,
                        len,
                    }
                    .into());
                }
                out_chunk.copy_from_slice(payload);
            }
        }

        cursor += 1 + len;
        decoded_chunks += 1;
    }

    if decoded_chunks != expected_chunks {
        return Err(CorruptKind::ChunkCountMismatch {
            got: decoded_chunks,
            expected: expected_chunks,
        }
        .into());
    }
    Ok(())
}

/// Position lists of a conforming encoder never exceed 31 entries.
#[inline]
fn check_list_len(offset: usize, len: usize) -> Result<()> {
    if len >= CHUNK_BYTES {
        return Err(CorruptKind::BadListLength { offset, len }.into());
    }
    Ok(())
}

/// Decode `frame` in one shot into a fresh chunk-aligned buffer.
///
/// The result is `buffer_size` bytes long; callers that want the
/// unpadded data can truncate it to the `data_size` reported by
/// [`peek_decoded_size`].
pub fn decompress_to_vec(frame: &[u8]) -> Result<Vec<u8>> {
    let (_, buffer_size) = peek_decoded_size(frame)?;
    let mut out = vec![0; buffer_size];
    decompress(frame, &mut out)?;
    Ok(out)
}
