use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::io_utils::format_io_error;

#[derive(Error, Debug)]
pub enum BuildToolError {
    /// Wrong number of positional command-line arguments.
    #[error("Expected {expected} argument but got {got}\n{usage}")]
    Usage {
        expected: usize,
        got: usize,
        usage: String,
    },

    /// Unknown flag, bad flag value, or a `--help`/`--version` request.
    #[error("{0}")]
    Cli(#[from] clap::Error),

    /// Filesystem access failed, with the operation and path involved.
    #[error("{}", format_io_error(.operation, .path, .source))]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serializing the JSON locale list failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BuildToolError>;
