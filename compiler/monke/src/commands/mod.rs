//! Command handlers for the `monke` CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! `read_file` live here in the module root.

use std::path::Path;

use crate::DriverError;

mod lex;

pub use lex::{lex_file, lex_path};

/// Read a source file, attaching the path to any failure.
pub(crate) fn read_file(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
