/*
 * SPDX-FileCopyrightText: 2026 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line front end: whole-file compression and decompression.

use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use bitpress::{decompress, peek_decoded_size, Compressor};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("bitpress: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let [_, input_path, output_path, mode] = args.as_slice() else {
        bail!("usage: bitpress <input> <output> <c|d>");
    };

    let data = fs::read(input_path).with_context(|| format!("cannot read {}", input_path))?;

    match mode.as_str() {
        "c" => {
            let mut compressor = Compressor::new(data.len())
                .with_context(|| format!("cannot set up compression of {} bytes", data.len()))?;
            compressor.input_mut()[..data.len()].copy_from_slice(&data);
            let frame_len = compressor.compress(data.len())?;
            fs::write(output_path, compressor.compressed())
                .with_context(|| format!("cannot write {}", output_path))?;
            println!(
                "{} -> {} bytes ({:.2}%)",
                data.len(),
                frame_len,
                100.0 * frame_len as f64 / data.len().max(1) as f64
            );
        }
        "d" => {
            let (data_size, buffer_size) =
                peek_decoded_size(&data).with_context(|| format!("cannot parse {}", input_path))?;
            let mut out = vec![0; buffer_size];
            decompress(&data, &mut out)
                .with_context(|| format!("cannot decompress {}", input_path))?;
            out.truncate(data_size);
            fs::write(output_path, &out)
                .with_context(|| format!("cannot write {}", output_path))?;
            println!("{} -> {} bytes", data.len(), data_size);
        }
        _ => bail!("mode must be c (compress) or d (decompress), got {:?}", mode),
    }
    Ok(())
}
