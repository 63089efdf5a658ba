//! Running checksums used by the two standard framings: CRC-32 for gzip
//! (RFC 1952 §8) and Adler-32 for zlib (RFC 1950 §8).
//!
//! Both are thin wrappers over ecosystem crates rather than hand-rolled
//! tables.

pub mod adler32;
pub mod crc32;
