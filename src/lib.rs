/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]

pub mod chunk;
pub mod error;
mod primitives;

mod compress;
mod decompress;

#[cfg(feature = "fuzz")]
pub mod fuzz;

pub use compress::{compress_to_vec, Compressor};
pub use decompress::{decompress, decompress_to_vec, peek_decoded_size};
pub use error::{CorruptKind, Error, Result};

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::chunk::*;
    pub use crate::error::*;
    pub use crate::{
        compress_to_vec, decompress, decompress_to_vec, peek_decoded_size, Compressor,
    };
}
