//! Library-level errors. The block encoder's inner hot loop is infallible
//! and trusts its caller; [`crate::stream::Stream::encode`] and `finish`
//! check the caller-supplied buffer against the worst case up front and
//! return [`SlzError::OutputTooSmall`] rather than let the hot loop run past
//! the end of a too-small buffer. The file/stream orchestration layer around
//! that does real I/O and needs a real error type too.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlzError {
    #[error("output buffer too small: needed at least {needed} bytes, had {available}")]
    OutputTooSmall { needed: usize, available: usize },

    #[error("refusing to write compressed data to a terminal (use -f to force)")]
    RefusedTty,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SlzError>;
