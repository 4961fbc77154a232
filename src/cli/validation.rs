// validation.rs - Input validation utilities

use crate::cli::args::Args;
use std::path::{Path, PathBuf};

/// Source used when neither the command line nor the config names one
pub const DEFAULT_SOURCE: &str = "docs/phase4-testing/SECURITY_TEST_CASES.csv";
/// Destination used when neither the command line nor the config names one
pub const DEFAULT_DESTINATION: &str = "X4O_Test_Cases.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub dry_run: bool,
    pub json: bool,
}

/// Resolve defaults and reject argument combinations that cannot work
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let source = PathBuf::from(args.source.as_deref().unwrap_or(DEFAULT_SOURCE));
    let destination = PathBuf::from(args.destination.as_deref().unwrap_or(DEFAULT_DESTINATION));

    if source.as_os_str().is_empty() {
        return Err("--source must not be empty".to_string());
    }
    if destination.as_os_str().is_empty() {
        return Err("--destination must not be empty".to_string());
    }
    if same_file(&source, &destination) {
        return Err(format!(
            "Source and destination are the same file: {}",
            source.display()
        ));
    }
    if destination.is_dir() {
        return Err(format!(
            "Destination is a directory, expected a CSV file: {}",
            destination.display()
        ));
    }

    Ok(ValidationResult {
        source,
        destination,
        dry_run: args.dry_run,
        json: args.json,
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
