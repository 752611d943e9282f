//! Driver errors.
//!
//! The scanner itself never fails; everything here comes from the process
//! boundary: files, the terminal, and the command line.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// `lex <file>` could not read its input.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading stdin or writing stdout failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A subcommand was given without its required argument.
    #[error("missing argument, usage: monke {0}")]
    MissingArgument(&'static str),
}
