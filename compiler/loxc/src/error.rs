//! Driver failures and process exit codes.

use std::io;
use std::path::PathBuf;

/// Exit status for a command used incorrectly (sysexits `EX_USAGE`).
pub const EX_USAGE: i32 = 64;
/// Exit status for a script with lexical errors (sysexits `EX_DATAERR`).
pub const EX_DATAERR: i32 = 65;
/// Exit status for an I/O failure on the terminal streams (sysexits `EX_IOERR`).
pub const EX_IOERR: i32 = 74;

/// Failures of the driver itself, as opposed to problems in the script.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),
    #[error("could not read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl DriverError {
    /// Process exit status for this failure.
    ///
    /// An unreadable script counts as a usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage(_) | DriverError::ReadFile { .. } => EX_USAGE,
            DriverError::Io(_) => EX_IOERR,
        }
    }
}
