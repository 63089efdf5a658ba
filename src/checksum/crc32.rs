//! Thin wrapper around the `crc32fast` crate providing the running CRC-32
//! used by the gzip trailer (RFC 1952 §8, reflected polynomial 0xEDB88320).

/// Running CRC-32 accumulator. Equivalent to the C `struct` built around
/// `slz_crc32_by4` plus its running `crc` field.
#[derive(Debug, Default, Clone)]
pub struct Crc32 {
    hasher: crc32fast::Hasher,
}

impl Crc32 {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `data` into the running checksum.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Returns the CRC-32 of all data folded in so far.
    #[inline]
    pub fn finalize(&self) -> u32 {
        self.hasher.clone().finalize()
    }
}

/// One-shot CRC-32 — equivalent to calling `update` once then `finalize`.
#[inline]
pub fn crc32_oneshot(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(crc32_oneshot(b""), 0);
    }

    #[test]
    fn known_vector() {
        // Matches the gzip trailer for the single byte 'a' (E2 in the test suite).
        assert_eq!(crc32_oneshot(b"a"), 0xE8B7BE43);
    }

    #[test]
    fn incremental_matches_oneshot() {
        let mut crc = Crc32::new();
        crc.update(b"hello ");
        crc.update(b"world");
        assert_eq!(crc.finalize(), crc32_oneshot(b"hello world"));
    }
}
