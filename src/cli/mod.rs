//! The `slz` binary's argument surface and verbosity infrastructure.

pub mod args;
pub mod constants;

pub use args::Cli;
