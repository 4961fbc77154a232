// progress.rs - Progress events emitted while merging

use std::path::Path;

/// One observable step of a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeEvent<'a> {
    BackupCreated { backup: &'a Path },
    DestinationMissing { destination: &'a Path },
    SourceRead { source: &'a Path, rows: usize },
    Creating { destination: &'a Path },
    Appending { destination: &'a Path, existing_rows: usize },
    /// Source columns are being written in the destination's column order
    Reordered { destination: &'a Path },
    RowsWritten { destination: &'a Path, rows: usize },
}

/// Receiver of merge progress; the presentation layer implements this
pub trait MergeProgress {
    fn on_event(&mut self, event: MergeEvent<'_>);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl MergeProgress for NoProgress {
    fn on_event(&mut self, _event: MergeEvent<'_>) {}
}

/// Keeps a textual trace of events, mainly for tests
#[derive(Debug, Default, Clone)]
pub struct RecordedProgress {
    pub events: Vec<String>,
}

impl MergeProgress for RecordedProgress {
    fn on_event(&mut self, event: MergeEvent<'_>) {
        self.events.push(format!("{:?}", event));
    }
}
