// backup.rs - Timestamped backups of the destination file

use crate::error::MergeError;
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Timestamp layout used in backup names (one-second resolution)
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `<dir>/<stem>_backup_<YYYYMMDD_HHMMSS>.csv` next to `destination`
pub fn backup_path(destination: &Path, timestamp: NaiveDateTime) -> PathBuf {
    let stem = destination
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    destination.with_file_name(format!(
        "{}_backup_{}.csv",
        stem,
        timestamp.format(BACKUP_TIMESTAMP_FORMAT)
    ))
}

/// Write `content` to `path`. Never overwrites an existing file.
pub fn create_backup(content: &[u8], path: &Path) -> Result<(), MergeError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => MergeError::BackupExists(path.to_path_buf()),
            _ => MergeError::io("create backup", path, e),
        })?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| MergeError::io("write backup", path, e))?;

    log::info!("backup written: {} ({} bytes)", path.display(), content.len());
    Ok(())
}
