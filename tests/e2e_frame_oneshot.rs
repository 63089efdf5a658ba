//! One-shot `init`/`encode`/`finish` scenarios, covering the byte-exact
//! cases and the decompressibility/bounds properties.

use std::io::Read;

use slz::{worst_case_stream_len, Format, Stream};

fn compress_oneshot(format: Format, level: u8, input: &[u8]) -> Vec<u8> {
    let cap = worst_case_stream_len(format, input.len());
    let mut header = vec![0u8; cap];
    let (mut stream, hlen) = Stream::init(format, level, &mut header);

    let mut mid = vec![0u8; cap];
    let mlen = stream.encode(&mut mid, input, false).unwrap();

    let mut trailer = vec![0u8; cap];
    let tlen = stream.finish(&mut trailer).unwrap();

    let mut out = Vec::new();
    out.extend_from_slice(&header[..hlen]);
    out.extend_from_slice(&mid[..mlen]);
    out.extend_from_slice(&trailer[..tlen]);
    out
}

fn gunzip(bytes: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    out
}

fn unzlib(bytes: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::ZlibDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    out
}

fn inflate_raw(bytes: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::DeflateDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    out
}

#[test]
fn e1_empty_input_gzip_exact_bytes() {
    let out = compress_oneshot(Format::Gzip, 1, b"");
    let expected: [u8; 20] = [
        0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    assert_eq!(out, expected);
}

#[test]
fn e2_single_byte_gzip_exact_trailer() {
    let out = compress_oneshot(Format::Gzip, 1, b"a");
    assert_eq!(out.len(), 21);
    let trailer = &out[out.len() - 8..];
    assert_eq!(&trailer[..4], &0xE8B7BE43u32.to_le_bytes());
    assert_eq!(&trailer[4..8], &1u32.to_le_bytes());
    assert_eq!(gunzip(&out), b"a");
}

#[test]
fn e3_long_repeated_run_decompresses_and_is_small() {
    let input = vec![0x41u8; 260];
    let out = compress_oneshot(Format::RawDeflate, 1, &input);
    assert_eq!(inflate_raw(&out), input);
    // One literal plus two back-references must beat a 260-byte stored block.
    assert!(out.len() < 50);
}

#[test]
fn e4_short_string_zlib_adler32() {
    let out = compress_oneshot(Format::Zlib, 1, b"aaaaaaaaaa");
    let trailer = &out[out.len() - 4..];
    // s1 = 1 + 10*97 = 971, s2 = sum_{k=1..10}(1+97k) = 5345,
    // combined = (5345 << 16) | 971 = 0x14E103CB.
    assert_eq!(trailer, &0x14E1_03CBu32.to_be_bytes());
    assert_eq!(unzlib(&out), b"aaaaaaaaaa");
}

#[test]
fn e5_random_data_falls_back_to_stored_bound() {
    // A small xorshift PRNG avoids pulling in `rand` just for test data.
    let mut state: u32 = 0x1234_5678;
    let mut input = vec![0u8; 65536];
    for b in input.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *b = (state & 0xFF) as u8;
    }
    let out = compress_oneshot(Format::Gzip, 1, &input);
    assert_eq!(gunzip(&out), input);
    let bound = input.len() + (input.len() / 65535 + 1) * 5 + 18 + 3;
    assert!(out.len() <= bound, "{} > {}", out.len(), bound);
}

#[test]
fn decompressibility_holds_across_sizes() {
    for len in [0usize, 1, 3, 4, 17, 1000, 70000] {
        let input: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        for format in [Format::RawDeflate, Format::Gzip, Format::Zlib] {
            let out = compress_oneshot(format, 1, &input);
            let round_tripped = match format {
                Format::RawDeflate => inflate_raw(&out),
                Format::Gzip => gunzip(&out),
                Format::Zlib => unzlib(&out),
            };
            assert_eq!(round_tripped, input, "format {format:?}, len {len}");
        }
    }
}

#[test]
fn no_backreference_exceeds_rfc_bounds() {
    // A long run forces repeated matches; verify indirectly by decompressing
    // (an out-of-bounds distance/length would desync a standards-compliant
    // decoder and this assertion would fail).
    let input: Vec<u8> = (0..40000).map(|i| (i % 7) as u8).collect();
    let out = compress_oneshot(Format::RawDeflate, 1, &input);
    assert_eq!(inflate_raw(&out), input);
}
