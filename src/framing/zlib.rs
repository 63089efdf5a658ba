//! Zlib framing (RFC 1950 §2): a fixed 2-byte header followed by the raw
//! DEFLATE stream and a 4-byte big-endian Adler-32 trailer.

use super::Framer;
use crate::bitwriter::{BitWriter, OutCursor};

/// CMF=0x78 (CM=8 deflate, CINFO=7, 32K window), FLG=0x01 chosen so that
/// `(CMF << 8 | FLG) % 31 == 0` with FDICT=0 and FLEVEL=0 (fastest).
pub const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];

#[derive(Debug, Default, Clone, Copy)]
pub struct ZlibFramer;

impl Framer for ZlibFramer {
    fn header_len(&self) -> usize {
        ZLIB_HEADER.len()
    }

    fn trailer_len(&self) -> usize {
        4
    }

    fn write_header(&self, _bw: &mut BitWriter, out: &mut OutCursor) {
        out.push_slice(&ZLIB_HEADER);
    }

    fn write_trailer(&self, bw: &mut BitWriter, out: &mut OutCursor, crc: u32, _ilen: u32) {
        bw.put32_be(out, crc);
    }
}
