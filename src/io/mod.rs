//! File and stream I/O orchestration for the `slz` binary: source/sink
//! resolution, TTY refusal, and the chunked read-encode-write loop.

pub mod file_io;
pub mod run;

pub use file_io::{open_sink, open_source};
pub use run::{run_stream, Summary};
