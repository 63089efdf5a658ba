//! Streaming fixed-Huffman DEFLATE/GZIP/ZLIB encoder.
//!
//! Built for throughput over ratio: the block encoder only ever emits
//! stored blocks or fixed-Huffman blocks (RFC 1951 §3.2.4/§3.2.6), driven by
//! a one-pass, single-entry-hash-table LZ77 match finder. There is no
//! decompressor here and no dynamic-Huffman path — see `DESIGN.md` for the
//! reasoning.

pub mod bitwriter;
pub mod block;
pub mod checksum;
pub mod cli;
pub mod config;
pub mod error;
pub mod framing;
pub mod hash;
pub mod io;
pub mod stream;
pub mod tables;

/// The streaming encoder. Equivalent to `struct slz_stream`.
pub use stream::Stream;
/// Which RFC framing wraps the DEFLATE bitstream.
pub use stream::Format;
/// Coarse stream lifecycle (INIT/EOB/FIXED/LAST/DONE/END).
pub use stream::State;

/// Worst-case output size for one `encode` call over `input_len` bytes.
pub use stream::worst_case_block_len;
/// Worst-case total output size for a whole stream, header and trailer
/// included.
pub use stream::worst_case_stream_len;

pub use error::{Result, SlzError};

// ─────────────────────────────────────────────────────────────────────────
// Version API
// ─────────────────────────────────────────────────────────────────────────

pub const SLZ_VERSION_MAJOR: i32 = 1;
pub const SLZ_VERSION_MINOR: i32 = 2;
pub const SLZ_VERSION_STRING: &str = "1.2.0";

/// Returns the library version string (e.g. `"1.2.0"`).
pub fn version_string() -> &'static str {
    SLZ_VERSION_STRING
}
