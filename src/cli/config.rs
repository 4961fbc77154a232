// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub source: Option<String>,
    pub destination: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
    pub json: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        log::info!("saved configuration to {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# casemerge.toml - Configuration file for casemerge
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# CSV file whose rows are merged
source = "docs/phase4-testing/SECURITY_TEST_CASES.csv"

# Master CSV file; a timestamped backup is written next to it before merging
destination = "X4O_Test_Cases.csv"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without writing anything
dry_run = false

# Print the merge summary as JSON
json = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(
            config.source.as_deref(),
            Some("docs/phase4-testing/SECURITY_TEST_CASES.csv")
        );
        assert_eq!(config.destination.as_deref(), Some("X4O_Test_Cases.csv"));
        assert_eq!(config.dry_run, Some(false));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casemerge.toml");
        let config = Config {
            destination: Some("master.csv".to_string()),
            json: Some(true),
            ..Config::new()
        };

        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_unknown_file_reports_path() {
        let err = Config::from_file("does/not/exist.toml").unwrap_err();
        assert!(err.contains("does/not/exist.toml"));
    }
}
