//! Path utilities for pyselect data directories.
//!
//! Resolution order for the data root:
//! 1. `PYSELECT_DATA_DIR` environment variable (highest priority)
//! 2. System data directory (e.g., `~/.local/share/pyselect`)
//!
//! Directories are created on demand.

mod error;

#[cfg(test)]
mod test_utils;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "PYSELECT_DATA_DIR";

/// File name of the selection database.
pub const DATABASE_FILE_NAME: &str = "pyselect.db";

/// Get the root directory for application data.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var_os(DATA_DIR_ENV) {
        Some(path) if path.is_empty() => return Err(PathError::EmptyOverride(DATA_DIR_ENV)),
        Some(path) => PathBuf::from(path),
        None => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("pyselect"),
    };

    ensure_dir(&root)?;
    Ok(root)
}

/// Get the path to the selection database file.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE_NAME))
}

fn ensure_dir(path: &Path) -> Result<(), PathError> {
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
