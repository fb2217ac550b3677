use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Run configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopseedConfig {
    /// Seed for every random stream of the run.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Directory receiving the four tables and the manifest.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Last day of the customer registration window.
    #[serde(default = "default_base_date")]
    pub base_date: NaiveDate,
    /// First day of the one-year transaction window.
    #[serde(default = "default_window_start")]
    pub transaction_window_start: NaiveDate,
    pub data_generation: RecordCounts,
}

/// Requested number of records per generated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordCounts {
    pub customers: usize,
    pub products: usize,
    pub transactions: usize,
}

impl ShopseedConfig {
    pub fn new(counts: RecordCounts) -> Self {
        Self {
            seed: default_seed(),
            out_dir: default_out_dir(),
            base_date: default_base_date(),
            transaction_window_start: default_window_start(),
            data_generation: counts,
        }
    }

    /// Parse a TOML document. Missing count keys are a hard error.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ShopseedConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("out_dir must not be empty".to_string()));
        }
        if self.transaction_window_start.checked_add_days(chrono::Days::new(364)).is_none() {
            return Err(ConfigError::Invalid(format!(
                "transaction_window_start {} leaves no room for a one-year window",
                self.transaction_window_start
            )));
        }
        Ok(())
    }
}

/// Read and parse the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<ShopseedConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ShopseedConfig::from_toml_str(&contents)
}

fn default_seed() -> u64 {
    42
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("data/raw")
}

fn default_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

fn default_window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_defaults_around_counts() {
        let config = ShopseedConfig::from_toml_str(
            "[data_generation]\ncustomers = 10\nproducts = 5\ntransactions = 20\n",
        )
        .expect("parse config");

        assert_eq!(config.seed, 42);
        assert_eq!(config.out_dir, PathBuf::from("data/raw"));
        assert_eq!(
            config.data_generation,
            RecordCounts {
                customers: 10,
                products: 5,
                transactions: 20,
            }
        );
    }

    #[test]
    fn missing_count_is_fatal() {
        let result =
            ShopseedConfig::from_toml_str("[data_generation]\ncustomers = 10\nproducts = 5\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_section_is_fatal() {
        let result = ShopseedConfig::from_toml_str("seed = 7\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn negative_count_is_rejected() {
        let result = ShopseedConfig::from_toml_str(
            "[data_generation]\ncustomers = -1\nproducts = 5\ntransactions = 1\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        for contents in [
            "seeds = 7\n\n[data_generation]\ncustomers = 1\nproducts = 1\ntransactions = 1\n",
            "out_dr = \"x\"\n\n[data_generation]\ncustomers = 1\nproducts = 1\ntransactions = 1\n",
            "[data_generation]\ncustomers = 1\nproducts = 1\ntransactions = 1\nitems = 4\n",
        ] {
            let result = ShopseedConfig::from_toml_str(contents);
            assert!(matches!(result, Err(ConfigError::Parse(_))), "{contents}");
        }
    }

    #[test]
    fn overrides_seed_and_dates() {
        let config = ShopseedConfig::from_toml_str(
            "seed = 7\nout_dir = \"out\"\nbase_date = \"2023-06-30\"\n\n[data_generation]\ncustomers = 0\nproducts = 0\ntransactions = 0\n",
        )
        .expect("parse config");

        assert_eq!(config.seed, 7);
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(
            config.base_date,
            NaiveDate::from_ymd_opt(2023, 6, 30).expect("valid date")
        );
    }
}
