//! Raw DEFLATE: no framing at all. Present only so the format dispatch in
//! [`crate::stream`] can treat all three formats uniformly.

use super::Framer;
use crate::bitwriter::{BitWriter, OutCursor};

#[derive(Debug, Default, Clone, Copy)]
pub struct RawFramer;

impl Framer for RawFramer {
    fn header_len(&self) -> usize {
        0
    }

    fn trailer_len(&self) -> usize {
        0
    }

    fn write_header(&self, _bw: &mut BitWriter, _out: &mut OutCursor) {}

    fn write_trailer(&self, _bw: &mut BitWriter, _out: &mut OutCursor, _crc: u32, _ilen: u32) {}
}
