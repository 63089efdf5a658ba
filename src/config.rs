//! Compile-time configuration defaults.
//!
//! IS_CONSOLE(stream)-style checks are provided by `std::io::IsTerminal`
//! at each call site and do not need a constant here.

/// Default compression level: 1 (LZ77 + fixed Huffman). Overridable by the
/// `-0`/`-1` flags.
pub const CLEVEL_DEFAULT: u8 = 1;

/// Default output format when none of `-D`/`-G`/`-Z` is given.
pub const FORMAT_DEFAULT: crate::stream::Format = crate::stream::Format::Gzip;

/// Default per-`encode`-call chunk size read from the input. Overridable by
/// `-b`.
pub const BLOCK_SIZE_DEFAULT: usize = 256 * 1024;

/// Largest payload a single stored block can carry (LEN is a 16-bit field).
pub const MAX_STORED_CHUNK: usize = 65535;
