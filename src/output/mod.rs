// mod.rs - Console presentation of merge progress and results

use crate::core::{MergeEvent, MergeProgress, MergeSummary};
use crate::error::MergeError;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 60;

/// Prints one human-readable line per merge phase
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl ConsoleProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Text shown for a progress event
pub fn describe_event(event: &MergeEvent<'_>) -> String {
    match event {
        MergeEvent::BackupCreated { backup } => {
            format!("💾 Backup created: {}", backup.display())
        }
        MergeEvent::DestinationMissing { destination } => {
            format!(
                "📄 Main file does not exist, will create new: {}",
                destination.display()
            )
        }
        MergeEvent::SourceRead { source, rows } => {
            format!("📖 Read {} test cases from: {}", rows, source.display())
        }
        MergeEvent::Creating { destination } => {
            format!("🆕 Creating new file: {}", destination.display())
        }
        MergeEvent::Appending {
            destination,
            existing_rows,
        } => format!(
            "➕ Appending to existing file: {} ({} existing test cases)",
            destination.display(),
            existing_rows
        ),
        MergeEvent::Reordered { destination } => format!(
            "🔀 Column order differs, writing in the order of: {}",
            destination.display()
        ),
        MergeEvent::RowsWritten { destination, rows } => {
            format!("✅ Added {} test cases to {}", rows, destination.display())
        }
    }
}

impl<W: Write> MergeProgress for ConsoleProgress<W> {
    fn on_event(&mut self, event: MergeEvent<'_>) {
        if let Err(e) = writeln!(self.out, "{}", describe_event(&event)) {
            log::warn!("failed to print progress: {}", e);
        }
    }
}

/// Success banner and file summary
pub fn write_summary<W: Write>(out: &mut W, summary: &MergeSummary) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    if summary.dry_run {
        writeln!(out, "✅ Dry run completed successfully (no files changed)")?;
    } else {
        writeln!(out, "✅ SUCCESS: Merge completed!")?;
    }
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    writeln!(out, "📁 Files:")?;
    writeln!(out, "  Main file: {}", summary.destination.display())?;
    writeln!(out, "  Test cases added: {}", summary.rows_added)?;
    writeln!(out, "  Total test cases: {}", summary.total_rows)?;
    if let Some(backup) = &summary.backup {
        writeln!(out, "  Backup: {}", backup.display())?;
    }
    if !summary.dry_run {
        writeln!(out)?;
        writeln!(out, "💡 Please review the merged file to ensure data integrity.")?;
    }
    Ok(())
}

/// Summary as a single JSON document
pub fn write_json<W: Write>(out: &mut W, summary: &MergeSummary) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *out, summary)
        .map_err(|e| format!("Failed to serialize summary: {}", e))?;
    writeln!(out).map_err(|e| format!("Write error: {}", e))
}

/// Error message, plus the backup location when one survived
pub fn format_error(error: &MergeError) -> String {
    match error.backup() {
        Some(backup) => format!(
            "{}\n💾 Backup of the original file: {}",
            error.root(),
            backup.display()
        ),
        None => error.to_string(),
    }
}
