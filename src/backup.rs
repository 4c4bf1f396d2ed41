//! Verbatim backup of the file about to be rewritten.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::BACKUP_SUFFIX;
use crate::document::FileError;

/// Sibling path with [`BACKUP_SUFFIX`] appended to the full file name.
///
/// `conf/app.properties` becomes `conf/app.properties.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `path` byte-for-byte to its backup path, overwriting any
/// previous backup. Returns the backup path.
pub fn create_backup(path: &Path) -> Result<PathBuf, FileError> {
    let dest = backup_path(path);
    fs::copy(path, &dest).map_err(|source| FileError::Copy {
        from: path.to_path_buf(),
        to: dest.clone(),
        source,
    })?;
    Ok(dest)
}
