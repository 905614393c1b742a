//! File I/O for conti sources
//!
//! Reading is the only fallible step on the extraction side.

use std::path::Path;

use crate::error::{ContixError, Result};

/// Read the whole source file as UTF-8
pub(crate) fn read_source(file_path: &Path) -> Result<String> {
    std::fs::read_to_string(file_path).map_err(|source| ContixError::ReadSource {
        path: file_path.to_path_buf(),
        source,
    })
}
