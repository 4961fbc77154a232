// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.source.is_none() {
            self.source = config.source;
        }
        if self.destination.is_none() {
            self.destination = config.destination;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }
        if !self.json && config.json.unwrap_or(false) {
            self.json = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_win() {
        let args = Args {
            source: Some("cli.csv".to_string()),
            ..Args::default()
        };
        let config = Config {
            source: Some("file.csv".to_string()),
            destination: Some("master.csv".to_string()),
            dry_run: Some(true),
            json: None,
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.source.as_deref(), Some("cli.csv"));
        assert_eq!(merged.destination.as_deref(), Some("master.csv"));
        assert!(merged.dry_run);
        assert!(!merged.json);
    }

    #[test]
    fn test_config_cannot_clear_cli_switch() {
        let args = Args {
            json: true,
            ..Args::default()
        };
        let config = Config {
            json: Some(false),
            ..Config::default()
        };
        assert!(args.merge_with_config(config).json);
    }
}
