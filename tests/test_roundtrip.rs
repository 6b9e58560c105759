/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bitpress::{compress_to_vec, decompress, decompress_to_vec, peek_decoded_size, Compressor};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Compress, decompress, and check the decoded buffer against the
/// zero-padded input.
fn roundtrip(data: &[u8]) {
    let frame = compress_to_vec(data).unwrap();

    let (data_size, buffer_size) = peek_decoded_size(&frame).unwrap();
    assert_eq!(data_size, data.len());
    assert_eq!(buffer_size, data.len().div_ceil(32) * 32);

    let decoded = decompress_to_vec(&frame).unwrap();
    assert_eq!(decoded.len(), buffer_size);
    assert_eq!(&decoded[..data.len()], data);
    assert!(decoded[data.len()..].iter().all(|&b| b == 0));
}

#[test]
fn fixed_patterns() {
    roundtrip(&[]);
    roundtrip(&[0]);
    roundtrip(&[0xFF]);
    roundtrip(&[0u8; 32]);
    roundtrip(&[0xFFu8; 32]);
    roundtrip(&[0xAAu8; 32]);
    roundtrip(&[0x55u8; 1000]);
    roundtrip(&[0u8; 1 << 16]);
    roundtrip(&[0xFFu8; (1 << 16) - 1]);
}

#[test]
fn every_length_up_to_three_chunks() {
    let mut rng = SmallRng::seed_from_u64(0);
    for len in 0..=96 {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        roundtrip(&data);
    }
}

#[test]
fn random_densities() {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..200 {
        let len = rng.gen_range(0..4096);
        // A per-bit weight steers whole buffers from sparse to dense.
        let weight = rng.gen_range(0..=8);
        let data: Vec<u8> = (0..len)
            .map(|_| {
                let mut byte = 0u8;
                for bit in 0..8 {
                    if rng.gen_range(0..8) < weight {
                        byte |= 1 << bit;
                    }
                }
                byte
            })
            .collect();
        roundtrip(&data);
    }
}

#[test]
fn mixed_density_chunks_in_one_buffer() {
    let mut data = vec![0u8; 4 * 32];
    data[32..64].fill(0xFF);
    data[64..96].fill(0xAA);
    data[96] = 1;
    roundtrip(&data);
}

#[test]
fn large_random_input() {
    let mut rng = SmallRng::seed_from_u64(2);
    let data: Vec<u8> = (0..1 << 20).map(|_| rng.gen()).collect();
    roundtrip(&data);
}

#[test]
fn context_reuse_matches_one_shot() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut compressor = Compressor::new(4096).unwrap();
    for _ in 0..50 {
        let len = rng.gen_range(0..=4096);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        compressor.input_mut()[..len].copy_from_slice(&data);
        let frame_len = compressor.compress(len).unwrap();
        assert_eq!(compressor.compressed().len(), frame_len);
        assert_eq!(compressor.compressed(), compress_to_vec(&data).unwrap());
    }
}

#[test]
fn decompress_into_caller_buffer() {
    let data = [0x0Fu8; 100];
    let frame = compress_to_vec(&data).unwrap();
    let (_, buffer_size) = peek_decoded_size(&frame).unwrap();
    let mut out = vec![0u8; buffer_size + 7];
    decompress(&frame, &mut out).unwrap();
    assert_eq!(&out[..100], &data);
}
