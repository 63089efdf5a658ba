// cli/args.rs — argument surface for the `slz` binary.
//
// Flag set: level (-0/-1), forced buffer size (-b), stdout (-c),
// force-tty (-f), loop count (-l), test/discard (-t), verbosity
// (-v, repeatable), and format (-D/-G/-Z). Small enough a surface that
// derive-based parsing is the natural fit.

use std::path::PathBuf;

use clap::Parser;

use crate::stream::Format;

#[derive(Parser, Debug)]
#[command(name = "slz", about = "Streaming fixed-Huffman DEFLATE/GZIP/ZLIB encoder")]
pub struct Cli {
    /// Input file; defaults to stdin.
    pub input: Option<PathBuf>,

    /// Store only, no LZ77 matching.
    #[arg(short = '0')]
    pub level0: bool,

    /// LZ77 + fixed Huffman (default).
    #[arg(short = '1')]
    pub level1: bool,

    /// Force the per-call read buffer size to N bytes.
    #[arg(short = 'b', value_name = "N")]
    pub block_size: Option<usize>,

    /// Write to stdout (default).
    #[arg(short = 'c')]
    pub stdout: bool,

    /// Force writing compressed output to a terminal.
    #[arg(short = 'f')]
    pub force: bool,

    /// Repeat the compression N times, for benchmarking.
    #[arg(short = 'l', value_name = "N")]
    pub loops: Option<u32>,

    /// Test mode: compress but discard the output.
    #[arg(short = 't')]
    pub test: bool,

    /// Increase verbosity (repeatable).
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Raw deflate, no framing.
    #[arg(short = 'D')]
    pub raw: bool,

    /// Gzip framing (default).
    #[arg(short = 'G')]
    pub gzip: bool,

    /// Zlib framing.
    #[arg(short = 'Z')]
    pub zlib: bool,
}

impl Cli {
    pub fn level(&self) -> u8 {
        if self.level0 {
            0
        } else {
            1
        }
    }

    pub fn format(&self) -> Format {
        if self.raw {
            Format::RawDeflate
        } else if self.zlib {
            Format::Zlib
        } else {
            Format::Gzip
        }
    }

    pub fn loop_count(&self) -> u32 {
        self.loops.unwrap_or(1).max(1)
    }
}
