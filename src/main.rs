//! Binary entry point for the `slz` command-line tool.
//!
//! Parses flags, refuses writing compressed output to a terminal unless
//! forced, runs the compression loop, and prints a verbose summary to
//! stderr.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use slz::cli::args::Cli;
use slz::cli::constants::{display_level, set_display_level};
use slz::config::BLOCK_SIZE_DEFAULT;
use slz::io::{open_sink, open_source, run_stream, Summary};
use slz::{displaylevel, SlzError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_display_level((1 + cli.verbose as u32).min(4));

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            match &err {
                SlzError::RefusedTty => {
                    eprintln!("slz: {err} (pass -f to override)");
                }
                _ => eprintln!("slz: {err}"),
            }
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn exit_code_for(err: &SlzError) -> u8 {
    match err {
        SlzError::Io(_) => 2,
        SlzError::RefusedTty | SlzError::OutputTooSmall { .. } => 1,
    }
}

fn run(cli: &Cli) -> Result<ExitCode, SlzError> {
    let format = cli.format();
    let level = cli.level();
    let block_size = cli.block_size.unwrap_or(BLOCK_SIZE_DEFAULT);

    let mut source = open_source(cli.input.as_deref())?;
    let mut input = Vec::new();
    source.read_to_end(&mut input)?;

    // Read the whole file up front so `-l N` measures compression
    // throughput alone, not repeated disk reads.
    let loops = cli.loop_count();
    let mut summary = Summary::default();
    for i in 0..loops {
        let write_output = !cli.test && i == loops - 1;
        let mut cursor: &[u8] = &input;
        if write_output {
            let mut sink = open_sink(None, cli.force)?;
            summary = run_stream(&mut cursor, Some(&mut sink), format, level, block_size)?;
        } else {
            summary = run_stream(&mut cursor, None, format, level, block_size)?;
        }
    }

    if display_level() >= 2 {
        let ratio = if summary.total_in > 0 {
            summary.total_out as f64 * 100.0 / summary.total_in as f64
        } else {
            0.0
        };
        displaylevel!(
            2,
            "{} bytes -> {} bytes ({:.1}%)\n",
            summary.total_in,
            summary.total_out,
            ratio
        );
    }

    Ok(ExitCode::SUCCESS)
}
