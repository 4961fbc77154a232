// lib.rs - casemerge library root

//! # casemerge - Merge security test cases into a master test-case CSV
//!
//! Appends every data row of a source CSV file to a destination CSV file,
//! creating the destination when it does not exist yet. An existing
//! destination is first copied to `<stem>_backup_<YYYYMMDD_HHMMSS>.csv` in the
//! same directory.
//!
//! ## Features
//!
//! - **Timestamped backups**: byte-exact copy, never overwritten
//! - **Header reconciliation**: column order is matched, incompatible headers are rejected
//! - **Dry run**: every check without touching a file
//! - **Structured results**: a [`MergeSummary`] or a [`MergeError`], printing is left to the caller
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use casemerge::prelude::*;
//! use std::path::Path;
//!
//! let summary = merge(
//!     Path::new("docs/phase4-testing/SECURITY_TEST_CASES.csv"),
//!     Path::new("X4O_Test_Cases.csv"),
//! )?;
//! println!("added {} rows, {} total", summary.rows_added, summary.total_rows);
//! # Ok::<(), MergeError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{merge, MergeEvent, MergeProgress, MergeSummary, Merger, NoProgress};
    pub use crate::data::{Header, Row, Table};
    pub use crate::error::MergeError;
    pub use crate::output::{format_error, write_summary, ConsoleProgress};
}

// Re-export main types at the root level for convenience
pub use crate::core::{merge, MergeSummary, Merger};
pub use crate::data::{Header, Row, Table};
pub use crate::error::MergeError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "casemerge v{} - Merge security test cases into the master test-case CSV",
        VERSION
    )
}
