use std::path::Path;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use shopseed_core::Dataset;

use crate::errors::EvalError;
use crate::integrity::IntegrityReport;

/// Record counts per generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ManifestRecordCounts {
    pub customers: u64,
    pub products: u64,
    pub transactions: u64,
    pub transaction_items: u64,
}

/// Summary consumed by downstream loaders (`generation_metadata.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DatasetManifest {
    /// UTC ISO-8601 timestamp with microseconds and no offset.
    pub generated_at: String,
    pub record_counts: ManifestRecordCounts,
    pub integrity_check: IntegrityReport,
}

impl DatasetManifest {
    pub fn build(
        generated_at: DateTime<Utc>,
        dataset: &Dataset,
        integrity: &IntegrityReport,
    ) -> Self {
        Self {
            generated_at: generated_at
                .naive_utc()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            record_counts: ManifestRecordCounts {
                customers: count(dataset.customers.len()),
                products: count(dataset.products.len()),
                transactions: count(dataset.transactions.len()),
                transaction_items: count(dataset.items.len()),
            },
            integrity_check: integrity.clone(),
        }
    }

    /// Manifest as portable JSON, after [`normalize_json`].
    pub fn to_portable_json(&self) -> Result<Value, EvalError> {
        Ok(normalize_json(serde_json::to_value(self)?))
    }
}

/// Serialize, normalize and write the manifest to `path`.
pub fn emit_manifest(path: &Path, manifest: &DatasetManifest) -> Result<Value, EvalError> {
    let value = manifest.to_portable_json()?;
    std::fs::write(path, serde_json::to_vec_pretty(&value)?)?;
    Ok(value)
}

/// Rewrite integral floats as integers throughout a JSON tree.
///
/// Keeps internal float representations of whole numbers (scores, counts)
/// from surfacing as `100.0` in the manifest.
pub fn normalize_json(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize_json(value)))
                .collect(),
        ),
        Value::Array(values) => Value::Array(values.into_iter().map(normalize_json).collect()),
        Value::Number(number) => Value::Number(normalize_number(number)),
        other => other,
    }
}

fn normalize_number(number: Number) -> Number {
    if number.is_i64() || number.is_u64() {
        return number;
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value >= 0.0 && value <= u64::MAX as f64 => {
            Number::from(value as u64)
        }
        Some(value) if value.fract() == 0.0 && value < 0.0 && value >= i64::MIN as f64 => {
            Number::from(value as i64)
        }
        _ => number,
    }
}

fn count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn normalizes_nested_whole_floats() {
        let value = json!({
            "score": 100.0,
            "ratio": 0.25,
            "nested": [{"n": 3.0}, {"n": -2.0}],
            "label": "x",
        });

        assert_eq!(
            normalize_json(value),
            json!({
                "score": 100,
                "ratio": 0.25,
                "nested": [{"n": 3}, {"n": -2}],
                "label": "x",
            })
        );
    }

    #[test]
    fn formats_timestamp_with_microseconds() {
        let generated_at = DateTime::parse_from_rfc3339("2024-05-01T12:30:45.123456Z")
            .expect("parse timestamp")
            .with_timezone(&Utc);
        let manifest = DatasetManifest::build(
            generated_at,
            &Dataset::default(),
            &crate::validate_dataset(&Dataset::default(), Default::default()),
        );

        assert_eq!(manifest.generated_at, "2024-05-01T12:30:45.123456");
    }
}
