//! Interoperability tests.
//!
//! Proves byte-compatible, standards-conformant output two ways: (1) the
//! `slz` CLI binary and the library API produce identical bytes for the same
//! input, and (2) the system `gzip` binary (when present) can decompress our
//! gzip output. No `#[ignore]` is used so the tests always appear in the
//! test count; the system-binary check degrades to a skip message instead.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

use slz::{worst_case_stream_len, Format, Stream};

fn system_gzip() -> Option<String> {
    if let Ok(p) = std::env::var("GZIP_BIN") {
        if std::path::Path::new(&p).exists() {
            return Some(p);
        }
    }
    let out = Command::new("which").arg("gzip").output().ok()?;
    if out.status.success() {
        let path = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if !path.is_empty() {
            return Some(path);
        }
    }
    None
}

fn slz_bin() -> &'static str {
    env!("CARGO_BIN_EXE_slz")
}

fn compress_via_library(format: Format, input: &[u8]) -> Vec<u8> {
    let cap = worst_case_stream_len(format, input.len());
    let mut header = vec![0u8; cap];
    let (mut stream, hlen) = Stream::init(format, 1, &mut header);
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

fn compress_via_cli(flag: &str, input: &[u8]) -> Vec<u8> {
    let mut child = Command::new(slz_bin())
        .arg(flag)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn slz");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input)
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for slz");
    assert!(output.status.success());
    output.stdout
}

#[test]
fn cli_and_library_agree_byte_for_byte_gzip() {
    let input = b"the quick brown fox jumps over the lazy dog, over and over again";
    let via_lib = compress_via_library(Format::Gzip, input);
    let via_cli = compress_via_cli("-G", input);
    // Both paths stamp MTIME=0, so the streams should be identical.
    assert_eq!(via_lib, via_cli);
}

#[test]
fn cli_and_library_agree_byte_for_byte_zlib() {
    let input = b"zlib framed payload, repeated repeated repeated";
    let via_lib = compress_via_library(Format::Zlib, input);
    let via_cli = compress_via_cli("-Z", input);
    assert_eq!(via_lib, via_cli);
}

#[test]
fn cli_and_library_agree_on_empty_input() {
    let via_lib = compress_via_library(Format::Gzip, b"");
    let via_cli = compress_via_cli("-G", b"");
    assert_eq!(via_lib, via_cli);
}

#[test]
fn system_gzip_can_decompress_our_output() {
    let Some(gzip_path) = system_gzip() else {
        eprintln!("skipping system_gzip_can_decompress_our_output: no system gzip binary found");
        return;
    };

    let input = b"data produced by slz, decompressed by the system gzip binary";
    let compressed = compress_via_library(Format::Gzip, input);

    let mut child = Command::new(&gzip_path)
        .arg("-d")
        .arg("-c")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn system gzip");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(&compressed)
        .expect("write to gzip stdin");
    let output = child.wait_with_output().expect("wait for gzip");
    assert!(output.status.success());
    assert_eq!(output.stdout, input);
}

#[test]
fn flate2_independent_decoder_accepts_all_three_formats() {
    let input = b"cross-checked against an independent decoder implementation";

    let gz = compress_via_library(Format::Gzip, input);
    let mut gz_out = Vec::new();
    flate2::read::GzDecoder::new(&gz[..])
        .read_to_end(&mut gz_out)
        .unwrap();
    assert_eq!(gz_out, input);

    let zl = compress_via_library(Format::Zlib, input);
    let mut zl_out = Vec::new();
    flate2::read::ZlibDecoder::new(&zl[..])
        .read_to_end(&mut zl_out)
        .unwrap();
    assert_eq!(zl_out, input);

    let raw = compress_via_library(Format::RawDeflate, input);
    let mut raw_out = Vec::new();
    flate2::read::DeflateDecoder::new(&raw[..])
        .read_to_end(&mut raw_out)
        .unwrap();
    assert_eq!(raw_out, input);
}
