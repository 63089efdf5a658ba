// e2e/cli_integration.rs — CLI integration tests.
//
// Tests the `slz` binary as a black-box tool via std::process::Command.
// Covers stdin/stdout piping, file arguments, -t test mode, -D/-G/-Z format
// selection, and exit codes.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn slz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_slz"))
}

fn run_piped(args: &[&str], stdin_data: &[u8]) -> std::process::Output {
    let mut child = Command::new(slz_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn slz");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin_data)
        .expect("write stdin");
    child.wait_with_output().expect("wait for slz")
}

#[test]
fn compresses_stdin_to_stdout_as_gzip() {
    let output = run_piped(&["-G"], b"hello world");
    assert!(output.status.success());
    assert_eq!(&output.stdout[..2], &[0x1F, 0x8B]);

    let mut decoder = flate2::read::GzDecoder::new(&output.stdout[..]);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).unwrap();
    assert_eq!(decompressed, b"hello world");
}

#[test]
fn zlib_flag_selects_zlib_framing() {
    let output = run_piped(&["-Z"], b"zzz content zzz");
    assert!(output.status.success());
    assert_eq!(&output.stdout[..2], &[0x78, 0x01]);
}

#[test]
fn raw_flag_has_no_framing_bytes() {
    let gzip = run_piped(&["-G"], b"same input").stdout;
    let raw = run_piped(&["-D"], b"same input").stdout;
    // Raw deflate drops the 10-byte gzip header and 8-byte trailer.
    assert!(raw.len() < gzip.len());
}

#[test]
fn test_mode_produces_no_stdout() {
    let output = run_piped(&["-t"], b"discarded input");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn compresses_a_named_input_file() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, b"file contents here").unwrap();

    let output = Command::new(slz_bin())
        .arg(&input_path)
        .output()
        .expect("run slz");
    assert!(output.status.success());

    let mut decoder = flate2::read::GzDecoder::new(&output.stdout[..]);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).unwrap();
    assert_eq!(decompressed, b"file contents here");
}

#[test]
fn missing_input_file_exits_nonzero() {
    let output = Command::new(slz_bin())
        .arg("/nonexistent/path/does/not/exist")
        .output()
        .expect("run slz");
    assert!(!output.status.success());
}

#[test]
fn verbose_flag_prints_a_summary_to_stderr() {
    let output = run_piped(&["-v"], b"some data to compress");
    assert!(output.status.success());
    assert!(!output.stderr.is_empty());
}
