//! The chunked read-encode-write loop shared by the `slz` binary's normal
//! and test (`-t`, discard output) modes, and by its `-l N` benchmarking
//! loop.

use std::io::{Read, Write};

use crate::error::Result;
use crate::stream::{worst_case_block_len, Format, Stream};

/// Totals reported by the `-v` verbose summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct Summary {
    pub total_in: u64,
    pub total_out: u64,
}

/// Reads `source` to completion in `block_size`-byte chunks, compressing
/// each into a single `format`/`level` stream. Writes to `sink` when given;
/// passing `None` implements `-t` (compress, discard output).
pub fn run_stream(
    source: &mut dyn Read,
    mut sink: Option<&mut dyn Write>,
    format: Format,
    level: u8,
    block_size: usize,
) -> Result<Summary> {
    let mut header_buf = vec![0u8; 16];
    let (mut stream, hlen) = Stream::init(format, level, &mut header_buf);
    let mut summary = Summary {
        total_in: 0,
        total_out: hlen as u64,
    };
    if let Some(w) = sink.as_deref_mut() {
        w.write_all(&header_buf[..hlen])?;
    }

    let mut in_buf = vec![0u8; block_size.max(1)];
    let mut out_buf = vec![0u8; worst_case_block_len(block_size.max(1))];
    loop {
        let n = source.read(&mut in_buf)?;
        if n == 0 {
            break;
        }
        summary.total_in += n as u64;
        let written = stream.encode(&mut out_buf, &in_buf[..n], true)?;
        summary.total_out += written as u64;
        if let Some(w) = sink.as_deref_mut() {
            w.write_all(&out_buf[..written])?;
        }
    }

    let mut trailer_buf = vec![0u8; 16];
    let tlen = stream.finish(&mut trailer_buf)?;
    summary.total_out += tlen as u64;
    if let Some(w) = sink.as_deref_mut() {
        w.write_all(&trailer_buf[..tlen])?;
        w.flush()?;
    }

    Ok(summary)
}
