//! Source/sink resolution for the `slz` binary: stdin/file in, stdout/file
//! out, refusing to read or write a raw terminal.

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use crate::displaylevel;
use crate::error::{Result, SlzError};

/// Opens `path`, or stdin when `path` is `None`. Refuses to read from a
/// terminal — only piped or file input is accepted.
pub fn open_source(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) => {
            displaylevel!(3, "opening input file {}\n", p.display());
            Ok(Box::new(File::open(p)?))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(SlzError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "refusing to read compressed input from a terminal",
                )));
            }
            Ok(Box::new(stdin))
        }
    }
}

/// Opens `path` for writing, or stdout when `path` is `None`. Refuses to
/// write to a terminal unless `force` is set (the `-f` flag).
pub fn open_sink(path: Option<&Path>, force: bool) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            displaylevel!(3, "opening output file {}\n", p.display());
            Ok(Box::new(File::create(p)?))
        }
        None => {
            let stdout = io::stdout();
            if stdout.is_terminal() && !force {
                return Err(SlzError::RefusedTty);
            }
            Ok(Box::new(stdout))
        }
    }
}
