//! Command implementations.

pub mod analyze;
pub mod chunk;
pub mod config;

pub use self::analyze::execute_analyze;
pub use self::chunk::execute_chunk;
pub use self::config::execute_config;

use crate::error::{CliError, Result};
use std::path::Path;

/// Read a UTF-8 text file, naming the file on failure.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
