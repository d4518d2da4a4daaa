//! Error types for safe-prime generation and the key exchange.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a group or exchanging keys.
///
/// Every variant is fatal for the demo: the binary reports it and exits with
/// [`Error::exit_code`].
#[derive(Error, Debug)]
pub enum Error {
    /// A zero length, zero round count or out-of-range base was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A working buffer could not be reserved.
    #[error("failed to allocate a {len} byte working buffer")]
    AllocationFailure { len: usize },

    /// The OS entropy device could not be opened.
    #[error("failed to open entropy source {}: {source}", .path.display())]
    EntropyUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened entropy stream failed.
    #[error("failed to read from entropy source: {0}")]
    EntropyRead(#[from] io::Error),

    /// No candidate in `[start, p)` had a non-trivial order.
    #[error("no non-trivial generator found below the modulus")]
    GeneratorNotFound,
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
