use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopseed_core::{RecordCounts, ShopseedConfig};
use shopseed_eval::ScoringPolicy;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the tables and the manifest are written.
    pub out_dir: PathBuf,
    /// Seed every per-entity random stream is derived from.
    pub seed: u64,
    pub counts: RecordCounts,
    /// Last day of the customer registration window.
    pub base_date: NaiveDate,
    /// First day of the one-year transaction window.
    pub transaction_window_start: NaiveDate,
    /// Scoring applied by the integrity check.
    pub scoring: ScoringPolicy,
}

impl GenerateOptions {
    pub fn from_config(config: &ShopseedConfig) -> Self {
        Self {
            out_dir: config.out_dir.clone(),
            seed: config.seed,
            counts: config.data_generation,
            base_date: config.base_date,
            transaction_window_start: config.transaction_window_start,
            scoring: ScoringPolicy::default(),
        }
    }
}

/// Summary of a written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows_generated: u64,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: &str, rows_generated: usize, bytes_written: u64) {
        self.bytes_written = self.bytes_written.saturating_add(bytes_written);
        self.tables.push(TableReport {
            table: table.to_string(),
            rows_generated: rows_generated as u64,
            bytes_written,
        });
    }
}
