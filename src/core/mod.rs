// mod.rs - Core logic module

pub mod backup;
pub mod merger;
pub mod progress;

// Re-export main types for convenience
pub use backup::{backup_path, create_backup, BACKUP_TIMESTAMP_FORMAT};
pub use merger::{merge, MergeSummary, Merger};
pub use progress::{MergeEvent, MergeProgress, NoProgress, RecordedProgress};
