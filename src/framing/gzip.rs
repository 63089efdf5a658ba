//! Gzip member framing (RFC 1952 §2.3): a fixed 10-byte header followed by
//! the raw DEFLATE stream and an 8-byte trailer (CRC-32, ISIZE).

use super::Framer;
use crate::bitwriter::{BitWriter, OutCursor};

/// `{ID1, ID2, CM=8 deflate, FLG=0, MTIME=0, XFL=4 fastest, OS=3 unix}`.
pub const GZIP_HEADER: [u8; 10] = [0x1F, 0x8B, 0x08, 0x00, 0, 0, 0, 0, 0x04, 0x03];

#[derive(Debug, Default, Clone, Copy)]
pub struct GzipFramer;

impl Framer for GzipFramer {
    fn header_len(&self) -> usize {
        GZIP_HEADER.len()
    }

    fn trailer_len(&self) -> usize {
        8
    }

    fn write_header(&self, _bw: &mut BitWriter, out: &mut OutCursor) {
        out.push_slice(&GZIP_HEADER);
    }

    fn write_trailer(&self, bw: &mut BitWriter, out: &mut OutCursor, crc: u32, ilen: u32) {
        bw.put32_le(out, crc);
        bw.put32_le(out, ilen);
    }
}
