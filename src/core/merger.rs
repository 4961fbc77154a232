// merger.rs - Merge source test cases into the destination CSV

use crate::core::backup::{backup_path, create_backup};
use crate::core::progress::{MergeEvent, MergeProgress, NoProgress};
use crate::data::loaders::csv::{count_rows, count_rows_in, detect_terminator, read_header, read_table, write_rows};
use crate::data::{Header, Table};
use crate::error::MergeError;
use chrono::{Local, NaiveDateTime};
use csv::Terminator;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Outcome of a successful merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub rows_added: usize,
    pub total_rows: usize,
    pub backup: Option<PathBuf>,
    pub created: bool,
    pub dry_run: bool,
}

/// Merge all rows of `source` into `destination`, backing the destination up first
pub fn merge(source: &Path, destination: &Path) -> Result<MergeSummary, MergeError> {
    Merger::new(source, destination).run(&mut NoProgress)
}

/// How the incoming rows land in an existing destination
struct AppendPlan {
    header: Option<Header>,
    order: Header,
}

#[derive(Debug, Clone)]
pub struct Merger {
    source: PathBuf,
    destination: PathBuf,
    dry_run: bool,
    timestamp: Option<NaiveDateTime>,
}

impl Merger {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            dry_run: false,
            timestamp: None,
        }
    }

    /// Check and read everything, write nothing
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fixed backup timestamp instead of the local clock
    pub fn timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Run the merge: existence check, backup, read, write, count
    pub fn run(&self, progress: &mut dyn MergeProgress) -> Result<MergeSummary, MergeError> {
        if !self.source.is_file() {
            log::warn!("source missing: {}", self.source.display());
            return Err(MergeError::SourceNotFound(self.source.clone()));
        }

        let existing = if self.destination.exists() {
            Some(
                fs::read(&self.destination)
                    .map_err(|e| MergeError::io("read", &self.destination, e))?,
            )
        } else {
            None
        };

        let backup = match &existing {
            Some(content) if !self.dry_run => {
                let timestamp = self
                    .timestamp
                    .unwrap_or_else(|| Local::now().naive_local());
                let path = backup_path(&self.destination, timestamp);
                create_backup(content, &path)?;
                progress.on_event(MergeEvent::BackupCreated { backup: &path });
                Some(path)
            }
            Some(_) => None,
            None => {
                progress.on_event(MergeEvent::DestinationMissing {
                    destination: &self.destination,
                });
                None
            }
        };

        let (rows_added, total_rows) = self
            .merge_rows(existing.as_deref(), progress)
            .map_err(|e| e.with_backup(backup.as_deref()))?;

        Ok(MergeSummary {
            source: self.source.clone(),
            destination: self.destination.clone(),
            rows_added,
            total_rows,
            backup,
            created: existing.is_none(),
            dry_run: self.dry_run,
        })
    }

    fn merge_rows(
        &self,
        existing: Option<&[u8]>,
        progress: &mut dyn MergeProgress,
    ) -> Result<(usize, usize), MergeError> {
        let table = read_table(&self.source)?;
        progress.on_event(MergeEvent::SourceRead {
            source: &self.source,
            rows: table.len(),
        });
        if table.is_empty() {
            return Err(MergeError::EmptySource(self.source.clone()));
        }

        let written = match existing {
            None => self.create(&table, progress)?,
            Some(content) => self.append(content, &table, progress)?,
        };

        if self.dry_run {
            let existing_rows = match existing {
                Some(content) => count_rows_in(content, &self.destination)?,
                None => 0,
            };
            return Ok((written, existing_rows + written));
        }

        progress.on_event(MergeEvent::RowsWritten {
            destination: &self.destination,
            rows: written,
        });
        let total = count_rows(&self.destination)?;
        log::info!(
            "{} now holds {} rows ({} added)",
            self.destination.display(),
            total,
            written
        );
        Ok((written, total))
    }

    fn create(&self, table: &Table, progress: &mut dyn MergeProgress) -> Result<usize, MergeError> {
        progress.on_event(MergeEvent::Creating {
            destination: &self.destination,
        });
        if self.dry_run {
            return Ok(table.len());
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.destination)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => MergeError::DestinationExists(self.destination.clone()),
                _ => MergeError::io("create", &self.destination, e),
            })?;

        let order = table.field_order();
        write_rows(
            file,
            Some(&order),
            &table.rows,
            &order,
            Terminator::Any(b'\n'),
            &self.destination,
        )
    }

    fn append(
        &self,
        content: &[u8],
        table: &Table,
        progress: &mut dyn MergeProgress,
    ) -> Result<usize, MergeError> {
        let plan = self.plan_append(content, table, progress)?;
        progress.on_event(MergeEvent::Appending {
            destination: &self.destination,
            existing_rows: count_rows_in(content, &self.destination)?,
        });
        if self.dry_run {
            return Ok(table.len());
        }

        let terminator = detect_terminator(content);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.destination)
            .map_err(|e| MergeError::io("open for append", &self.destination, e))?;

        if !content.is_empty() && !content.ends_with(b"\n") {
            log::debug!("{} lacks a trailing newline", self.destination.display());
            file.write_all(terminator_bytes(terminator))
                .map_err(|e| MergeError::io("write", &self.destination, e))?;
        }

        write_rows(
            &mut file,
            plan.header.as_ref(),
            &table.rows,
            &plan.order,
            terminator,
            &self.destination,
        )
    }

    /// Reconcile the destination header with the incoming field order
    fn plan_append(
        &self,
        content: &[u8],
        table: &Table,
        progress: &mut dyn MergeProgress,
    ) -> Result<AppendPlan, MergeError> {
        let incoming = table.field_order();
        match read_header(content, &self.destination)? {
            None => Ok(AppendPlan {
                header: Some(incoming.clone()),
                order: incoming,
            }),
            Some(current) if current == incoming => Ok(AppendPlan {
                header: None,
                order: incoming,
            }),
            Some(current) if current.same_columns(&incoming) => {
                progress.on_event(MergeEvent::Reordered {
                    destination: &self.destination,
                });
                Ok(AppendPlan {
                    header: None,
                    order: current,
                })
            }
            Some(current) => Err(MergeError::HeaderMismatch {
                destination: current.columns().to_vec(),
                incoming: incoming.columns().to_vec(),
            }),
        }
    }
}

fn terminator_bytes(terminator: Terminator) -> &'static [u8] {
    match terminator {
        Terminator::CRLF => b"\r\n",
        _ => b"\n",
    }
}
