//! Format-specific framing: the header and trailer bytes wrapped around the
//! raw DEFLATE bitstream for gzip (RFC 1952) and zlib (RFC 1950).

pub mod gzip;
pub mod raw;
pub mod zlib;

use crate::bitwriter::{BitWriter, OutCursor};

/// A framing writes a header before the first DEFLATE block and a trailer
/// after the last one. Raw deflate implements both as no-ops.
pub trait Framer {
    /// Bytes the header occupies; used to size the caller's output buffer.
    fn header_len(&self) -> usize;
    /// Bytes the trailer occupies.
    fn trailer_len(&self) -> usize;

    fn write_header(&self, bw: &mut BitWriter, out: &mut OutCursor);

    /// `crc` is the format's running checksum (CRC-32 for gzip, Adler-32 for
    /// zlib, unused for raw); `ilen` is the total uncompressed length modulo
    /// 2^32.
    fn write_trailer(&self, bw: &mut BitWriter, out: &mut OutCursor, crc: u32, ilen: u32);
}
