use std::path::Path;

use serde::de::DeserializeOwned;

use shopseed_core::{Dataset, EntityKind};

use crate::errors::EvalError;

/// Load the four tables of a dataset directory.
///
/// Headers must match the column contract exactly, in order.
pub fn read_dataset(dir: &Path) -> Result<Dataset, EvalError> {
    Ok(Dataset {
        customers: read_table(dir, EntityKind::Customer)?,
        products: read_table(dir, EntityKind::Product)?,
        transactions: read_table(dir, EntityKind::Transaction)?,
        items: read_table(dir, EntityKind::TransactionItem)?,
    })
}

fn read_table<T: DeserializeOwned>(dir: &Path, kind: EntityKind) -> Result<Vec<T>, EvalError> {
    let path = dir.join(kind.file_name());
    if !path.exists() {
        return Err(EvalError::InvalidDataset(format!(
            "dataset file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)?;

    let headers = reader.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    if headers != kind.columns() {
        return Err(EvalError::InvalidDataset(format!(
            "{}: expected columns [{}], found [{}]",
            kind.file_name(),
            kind.columns().join(", "),
            headers.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
