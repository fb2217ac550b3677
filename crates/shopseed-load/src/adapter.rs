use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::LoadError;

/// Rows copied into one staging table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLoad {
    pub table: String,
    pub rows: u64,
}

/// Outcome of a committed load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
}

impl LoadReport {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|table| table.rows).sum()
    }
}

/// Trait implemented by stores that can receive a generated dataset.
#[async_trait]
pub trait StagingLoader {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Load every table of `dataset_dir`, all or nothing.
    async fn load(&self, dataset_dir: &Path) -> Result<LoadReport, LoadError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn report_sums_rows_and_serializes_per_table() {
        let report = LoadReport {
            tables: vec![
                TableLoad {
                    table: "customers".to_string(),
                    rows: 5,
                },
                TableLoad {
                    table: "transaction_items".to_string(),
                    rows: 9,
                },
            ],
        };

        assert_eq!(report.total_rows(), 14);
        assert_eq!(
            serde_json::to_value(&report).expect("serialize report"),
            json!({
                "tables": [
                    {"table": "customers", "rows": 5},
                    {"table": "transaction_items", "rows": 9},
                ]
            })
        );
    }
}
