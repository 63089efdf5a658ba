//! The public API façade: [`Stream`], [`Format`], and the `init`/`encode`/
//! `finish` entry points.
//!
//! Mirrors the `slz_stream` struct and the `slz_init`/`slz_encode`/
//! `slz_finish` call sequence, generalized to dispatch across the three
//! supported framings instead of being gzip-only.

use crate::bitwriter::{BitWriter, OutCursor};
use crate::block::{BlockEncoder, Level};
use crate::checksum::{adler32::Adler32, crc32::Crc32};
use crate::error::{Result, SlzError};
use crate::framing::{gzip::GzipFramer, raw::RawFramer, zlib::ZlibFramer, Framer};

/// Which RFC framing wraps the DEFLATE bitstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    RawDeflate,
    Gzip,
    Zlib,
}

/// Coarse stream lifecycle. `Fixed`/`Eob` track whether a fixed-Huffman
/// block is currently open; `Last`/`Done` are transient states `finish`
/// passes through on its way to `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Init,
    Eob,
    Fixed,
    Last,
    Done,
    End,
}

enum Checksum {
    Crc32(Crc32),
    Adler32(Adler32),
    None,
}

impl Checksum {
    fn for_format(format: Format) -> Self {
        match format {
            Format::Gzip => Checksum::Crc32(Crc32::new()),
            Format::Zlib => Checksum::Adler32(Adler32::new()),
            Format::RawDeflate => Checksum::None,
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Checksum::Crc32(c) => c.update(data),
            Checksum::Adler32(a) => a.update(data),
            Checksum::None => {}
        }
    }

    fn finalize(&self) -> u32 {
        match self {
            Checksum::Crc32(c) => c.finalize(),
            Checksum::Adler32(a) => a.finalize(),
            Checksum::None => 0,
        }
    }
}

/// A single streaming encoder. Not thread-safe; exclusively owned by its
/// caller for its whole lifetime.
pub struct Stream {
    format: Format,
    level: Level,
    state: State,
    block: BlockEncoder,
    bw: BitWriter,
    checksum: Checksum,
    ilen: u64,
}

impl Stream {
    /// Creates a stream and writes the format's header (empty for raw
    /// deflate) into `out`. Returns `(stream, bytes_written)`.
    ///
    /// `level` is 0 (stored blocks only) or 1 (LZ77 + fixed Huffman).
    pub fn init(format: Format, level: u8, out: &mut [u8]) -> (Self, usize) {
        let level = if level == 0 {
            Level::Store
        } else {
            Level::Compress
        };
        let mut stream = Self {
            format,
            level,
            state: State::Init,
            block: BlockEncoder::new(),
            bw: BitWriter::new(),
            checksum: Checksum::for_format(format),
            ilen: 0,
        };
        let mut cursor = OutCursor::new(out);
        framer_for(format).write_header(&mut stream.bw, &mut cursor);
        stream.state = State::Eob;
        (stream, cursor.written())
    }

    /// Compresses `input`, appending to `out`. `more` signals whether
    /// further `encode` calls will follow before `finish`. It is accepted
    /// to match the streaming contract callers expect, but currently
    /// unused: pending literals are flushed at the end of every window
    /// rather than carried into the next call (see DESIGN.md's "literal
    /// carry-over" entry). This never changes whether the stream
    /// decompresses correctly, only how blocks are split.
    ///
    /// Returns the number of bytes written. Returns `Ok(0)` without
    /// touching `out` once the stream has reached [`State::End`]. Returns
    /// [`SlzError::OutputTooSmall`] without touching `out` or any stream
    /// state if `out` is smaller than [`worst_case_block_len`] for
    /// `input.len()` — the one bound this call can actually overflow, so
    /// it's checked up front rather than mid-write.
    pub fn encode(&mut self, out: &mut [u8], input: &[u8], _more: bool) -> Result<usize> {
        if self.state == State::End {
            return Ok(0);
        }
        let needed = worst_case_block_len(input.len());
        if out.len() < needed {
            return Err(SlzError::OutputTooSmall {
                needed,
                available: out.len(),
            });
        }

        self.checksum.update(input);
        self.ilen = self.ilen.wrapping_add(input.len() as u64);

        let mut cursor = OutCursor::new(out);
        self.block
            .encode_window(&mut self.bw, &mut cursor, input, self.level);
        self.state = if self.block.fixed_block_open() {
            State::Fixed
        } else {
            State::Eob
        };
        Ok(cursor.written())
    }

    /// Closes the DEFLATE bitstream (emitting the single BFINAL=1 block)
    /// and appends the format's trailer. Returns the number of bytes
    /// written. Idempotent past the first call: returns `Ok(0)` thereafter.
    /// Returns [`SlzError::OutputTooSmall`] without touching `out` or any
    /// stream state if `out` is too small for the closing block and
    /// trailer.
    pub fn finish(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.state == State::End {
            return Ok(0);
        }
        let framer = framer_for(self.format);
        let needed = 8 + framer.trailer_len();
        if out.len() < needed {
            return Err(SlzError::OutputTooSmall {
                needed,
                available: out.len(),
            });
        }

        self.state = State::Last;
        let mut cursor = OutCursor::new(out);
        self.block.finish(&mut self.bw, &mut cursor);
        self.state = State::Done;

        let crc = self.checksum.finalize();
        let ilen32 = (self.ilen & 0xFFFF_FFFF) as u32;
        framer.write_trailer(&mut self.bw, &mut cursor, crc, ilen32);

        self.state = State::End;
        Ok(cursor.written())
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

fn framer_for(format: Format) -> Box<dyn Framer> {
    match format {
        Format::RawDeflate => Box::new(RawFramer),
        Format::Gzip => Box::new(GzipFramer),
        Format::Zlib => Box::new(ZlibFramer),
    }
}

/// Worst-case output size for a single `encode` call over `input_len` bytes:
/// every byte emitted as a stored-block literal, 5 bytes of stored-block
/// overhead per 65535-byte chunk, plus slack for in-flight bit-queue state.
pub fn worst_case_block_len(input_len: usize) -> usize {
    let chunks = input_len.div_ceil(65535).max(1);
    input_len + chunks * 5 + 32
}

/// Worst-case total output size for a whole stream of `total_len` input
/// bytes under `format`, including header, trailer, and the closing empty
/// final block.
pub fn worst_case_stream_len(format: Format, total_len: usize) -> usize {
    let framer = framer_for(format);
    worst_case_block_len(total_len) + framer.header_len() + framer.trailer_len() + 8
}
