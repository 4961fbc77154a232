// error.rs - Merge error types

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can stop a merge.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("source file has no data rows: {}", .0.display())]
    EmptySource(PathBuf),

    #[error("destination header does not match source header (destination: [{}], source: [{}])", .destination.join(", "), .incoming.join(", "))]
    HeaderMismatch {
        destination: Vec<String>,
        incoming: Vec<String>,
    },

    #[error("backup file already exists: {}", .0.display())]
    BackupExists(PathBuf),

    #[error("destination appeared while merging: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{source} (backup preserved at {})", .backup.display())]
    BackupPreserved {
        backup: PathBuf,
        #[source]
        source: Box<MergeError>,
    },
}

impl MergeError {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        MergeError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        MergeError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach the location of an already written backup.
    pub(crate) fn with_backup(self, backup: Option<&Path>) -> Self {
        match backup {
            Some(path) => MergeError::BackupPreserved {
                backup: path.to_path_buf(),
                source: Box::new(self),
            },
            None => self,
        }
    }

    /// Backup written before the failure, if any.
    pub fn backup(&self) -> Option<&Path> {
        match self {
            MergeError::BackupPreserved { backup, .. } => Some(backup),
            _ => None,
        }
    }

    /// The underlying failure with any backup wrapper removed.
    pub fn root(&self) -> &MergeError {
        match self {
            MergeError::BackupPreserved { source, .. } => source.root(),
            other => other,
        }
    }
}
