//! The block encoder: the per-call hot loop that turns one input window into
//! DEFLATE stored and fixed-Huffman blocks.
//!
//! Matches are found with [`crate::hash::HashTable`] and never span an
//! `encode` call boundary — the table is cleared at the start of every
//! window. Pending literals are decided (stored vs fixed-Huffman) and
//! flushed at the end of the window they were collected in rather than
//! carried into the next call, a disclosed deviation from retaining them
//! across `more=true` calls — see DESIGN.md's "literal carry-over" entry
//! for why and for what this does and doesn't affect (block-boundary
//! placement only, never whether the stream decompresses correctly).

use crate::bitwriter::{BitWriter, OutCursor};
use crate::hash::HashTable;
use crate::tables::{distance_entry, fixed_huffman_code, length_entry, reverse_bits, EOB_SYMBOL};

/// Stored blocks inflate by 5 bytes (header + LEN/NLEN) and cost one 9-bit
/// switch penalty less than fixed-Huffman once 52 of the pending literals'
/// bits would otherwise cost 9 bits apiece.
const STORED_BLOCK_THRESHOLD_BIT9: usize = 52;

/// Maximum payload of a single stored block (LEN is a 16-bit field).
const MAX_STORED_CHUNK: usize = 65535;

/// Whether the encoder should attempt LZ77 matching or only ever emit the
/// input verbatim as stored blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Store,
    Compress,
}

/// Owns the match finder and tracks whether a fixed-Huffman block is
/// currently open (header written, EOB not yet sent).
pub struct BlockEncoder {
    hash: HashTable,
    fixed_open: bool,
}

impl BlockEncoder {
    pub fn new() -> Self {
        Self {
            hash: HashTable::new(),
            fixed_open: false,
        }
    }

    /// True while a fixed-Huffman block's header has been written but its
    /// EOB has not. Exposed so the stream state machine can track whether a
    /// block is open across `encode` calls.
    pub fn fixed_block_open(&self) -> bool {
        self.fixed_open
    }

    /// Encodes one input window.
    pub fn encode_window(
        &mut self,
        bw: &mut BitWriter,
        out: &mut OutCursor,
        input: &[u8],
        level: Level,
    ) {
        self.hash.clear();

        if level == Level::Store || input.len() < 4 {
            self.flush_literal_run(bw, out, input, level);
            return;
        }

        let l = input.len();
        let mut lit_start = 0usize;
        let mut p = 0usize;

        while p + 4 <= l {
            let word = u32::from_le_bytes(input[p..p + 4].try_into().unwrap());
            if let Some(prev) = self.hash.lookup_and_insert(p as u32, word) {
                let distance = p - prev as usize;
                if (1..=32768).contains(&distance) {
                    let max_len = (l - p).min(258);
                    let mlen = common_prefix_len(&input[p..], &input[p - distance..], max_len);
                    if mlen >= 3 {
                        self.flush_literal_run(bw, out, &input[lit_start..p], level);
                        self.emit_match(bw, out, mlen as u16, distance as u32);
                        p += mlen;
                        lit_start = p;
                        continue;
                    }
                }
            }
            p += 1;
        }

        self.flush_literal_run(bw, out, &input[lit_start..l], level);
    }

    /// Closes out the stream: ends any open fixed-Huffman block, then emits
    /// an empty BFINAL=1 fixed-Huffman block to carry the final-block bit
    /// (a block header, once written with BFINAL=0, can never be amended in
    /// place, so the final bit always lands in a fresh trailing block).
    pub fn finish(&mut self, bw: &mut BitWriter, out: &mut OutCursor) {
        self.close_fixed_block(bw, out);
        let bfinal = 1u32;
        let btype = 0b01u32;
        bw.enqueue(out, bfinal | (btype << 1), 3);
        let (code, bits) = fixed_huffman_code(EOB_SYMBOL);
        bw.enqueue(out, code as u32, bits);
        bw.align_to_byte(out);
    }

    fn open_fixed_block(&mut self, bw: &mut BitWriter, out: &mut OutCursor) {
        if !self.fixed_open {
            let bfinal = 0u32;
            let btype = 0b01u32;
            bw.enqueue(out, bfinal | (btype << 1), 3);
            self.fixed_open = true;
        }
    }

    fn close_fixed_block(&mut self, bw: &mut BitWriter, out: &mut OutCursor) {
        if self.fixed_open {
            let (code, bits) = fixed_huffman_code(EOB_SYMBOL);
            bw.enqueue(out, code as u32, bits);
            self.fixed_open = false;
        }
    }

    fn emit_match(&mut self, bw: &mut BitWriter, out: &mut OutCursor, mlen: u16, distance: u32) {
        self.open_fixed_block(bw, out);

        let le = length_entry(mlen);
        let (code, bits) = fixed_huffman_code(le.symbol);
        bw.enqueue(out, code as u32, bits);
        if le.extra_bits > 0 {
            let extra = (mlen - le.extra_base) as u32;
            bw.enqueue(out, extra, le.extra_bits);
        }

        let de = distance_entry(distance);
        let reversed = reverse_bits(de.code as u16, 5);
        bw.enqueue(out, reversed as u32, 5);
        if de.extra_bits > 0 {
            let extra = distance - de.extra_base as u32;
            bw.enqueue(out, extra, de.extra_bits);
        }
    }

    fn flush_literal_run(
        &mut self,
        bw: &mut BitWriter,
        out: &mut OutCursor,
        bytes: &[u8],
        level: Level,
    ) {
        if bytes.is_empty() {
            return;
        }

        let bit9 = bytes.iter().filter(|&&b| b >= 144).count();
        let use_stored = level == Level::Store || bit9 >= STORED_BLOCK_THRESHOLD_BIT9;

        if use_stored {
            self.close_fixed_block(bw, out);
            for chunk in bytes.chunks(MAX_STORED_CHUNK) {
                self.write_stored_block(bw, out, chunk);
            }
        } else {
            self.open_fixed_block(bw, out);
            for &b in bytes {
                let (code, bits) = fixed_huffman_code(b as u16);
                bw.enqueue(out, code as u32, bits);
            }
        }
    }

    fn write_stored_block(&mut self, bw: &mut BitWriter, out: &mut OutCursor, chunk: &[u8]) {
        let bfinal = 0u32;
        let btype = 0b00u32;
        bw.enqueue(out, bfinal | (btype << 1), 3);
        bw.align_to_byte(out);
        let len = chunk.len() as u16;
        bw.put16_le(out, len);
        bw.put16_le(out, !len);
        out.push_slice(chunk);
    }
}

impl Default for BlockEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the common prefix of `a` and `b`, capped at `max_len`.
fn common_prefix_len(a: &[u8], b: &[u8], max_len: usize) -> usize {
    let mut n = 0;
    while n < max_len && a[n] == b[n] {
        n += 1;
    }
    n
}
