//! Configuration for a seeding run.
//!
//! Settings come from CLI flags, an optional YAML file, and defaults, in that
//! order of precedence.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file used when neither the CLI nor the config file names one
pub const DEFAULT_OUTPUT: &str = "test_data.sql";

/// YAML settings file
///
/// ```yaml
/// seed: 42
/// output: fixtures/seed.sql
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedYamlConfig {
    /// Random seed for reproducible output
    pub seed: Option<u64>,
    /// Output SQL file
    pub output: Option<PathBuf>,
}

impl SeedYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: SeedYamlConfig = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        Ok(config)
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Output SQL file
    pub output: PathBuf,
    /// Seed for the generator RNG
    pub seed: u64,
    /// Generate without writing the output file
    pub dry_run: bool,
    /// Show a progress spinner on stderr
    pub progress: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: 0,
            dry_run: false,
            progress: false,
        }
    }
}

impl SeedConfig {
    /// Merge CLI values over file values over defaults. A seed missing from
    /// both is drawn from system randomness.
    pub fn resolve(
        output: Option<PathBuf>,
        seed: Option<u64>,
        file: Option<&SeedYamlConfig>,
    ) -> Self {
        let output = output
            .or_else(|| file.and_then(|f| f.output.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let seed = seed
            .or_else(|| file.and_then(|f| f.seed))
            .unwrap_or_else(rand::random);

        Self {
            output,
            seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
seed: 42
output: fixtures/seed.sql
"#;
        let config: SeedYamlConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output, Some(PathBuf::from("fixtures/seed.sql")));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: SeedYamlConfig = serde_yaml_ng::from_str("seed: 7\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<SeedYamlConfig, _> = serde_yaml_ng::from_str("rows: 10\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = SeedYamlConfig {
            seed: Some(1),
            output: Some(PathBuf::from("from_file.sql")),
        };
        let config = SeedConfig::resolve(Some(PathBuf::from("cli.sql")), Some(2), Some(&file));
        assert_eq!(config.output, PathBuf::from("cli.sql"));
        assert_eq!(config.seed, 2);
    }

    #[test]
    fn test_file_used_when_cli_silent() {
        let file = SeedYamlConfig {
            seed: Some(9),
            output: Some(PathBuf::from("from_file.sql")),
        };
        let config = SeedConfig::resolve(None, None, Some(&file));
        assert_eq!(config.output, PathBuf::from("from_file.sql"));
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_default_output() {
        let config = SeedConfig::resolve(None, Some(3), None);
        assert_eq!(config.output, PathBuf::from("test_data.sql"));
        assert!(!config.dry_run);
    }
}
