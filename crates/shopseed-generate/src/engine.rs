use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use shopseed_core::{Dataset, EntityKind, MANIFEST_FILE};
use shopseed_eval::{DatasetManifest, IntegrityReport, emit_manifest, validate_dataset};

use crate::errors::GenerationError;
use crate::generators::{
    generate_customers, generate_products, generate_transaction_items, generate_transactions,
    stream_rng,
};
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::write_table_csv;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub integrity: IntegrityReport,
    pub manifest: DatasetManifest,
    pub report: GenerationReport,
}

/// Entry point for generating the dataset and its artifacts.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Build the four collections in memory, totals included.
    ///
    /// Each entity draws from its own stream derived from the seed, so the
    /// output only depends on the options.
    pub fn generate(&self) -> Result<Dataset, GenerationError> {
        let options = &self.options;
        let counts = options.counts;

        let customers = generate_customers(
            counts.customers,
            options.base_date,
            &mut stream_rng(options.seed, EntityKind::Customer.table_name()),
        );
        info!(table = "customers", rows = customers.len(), "entities generated");

        let products = generate_products(
            counts.products,
            &mut stream_rng(options.seed, EntityKind::Product.table_name()),
        );
        info!(table = "products", rows = products.len(), "entities generated");

        let customer_ids: Vec<String> = customers
            .iter()
            .map(|customer| customer.customer_id.clone())
            .collect();
        let mut transactions = generate_transactions(
            counts.transactions,
            &customer_ids,
            options.transaction_window_start,
            &mut stream_rng(options.seed, EntityKind::Transaction.table_name()),
        )?;
        info!(table = "transactions", rows = transactions.len(), "entities generated");

        let items = generate_transaction_items(
            &mut transactions,
            &products,
            &mut stream_rng(options.seed, EntityKind::TransactionItem.table_name()),
        );
        info!(
            table = "transaction_items",
            rows = items.len(),
            "entities generated, totals back-filled"
        );

        Ok(Dataset {
            customers,
            products,
            transactions,
            items,
        })
    }

    /// Generate, validate, then write the four tables and the manifest.
    ///
    /// Nothing touches disk until every collection is final. A failure
    /// while writing may leave earlier files in place.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let out_dir = self.options.out_dir.clone();

        info!(
            seed = self.options.seed,
            customers = self.options.counts.customers,
            products = self.options.counts.products,
            transactions = self.options.counts.transactions,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let dataset = self.generate()?;
        let integrity = validate_dataset(&dataset, self.options.scoring);
        if !integrity.is_clean() {
            warn!(
                orphans = integrity.orphan_records.total(),
                "generated dataset failed referential integrity"
            );
        }

        std::fs::create_dir_all(&out_dir)?;
        let mut report = GenerationReport::new(self.options.seed);
        write_table(&out_dir, EntityKind::Customer, &dataset.customers, &mut report)?;
        write_table(&out_dir, EntityKind::Product, &dataset.products, &mut report)?;
        write_table(&out_dir, EntityKind::Transaction, &dataset.transactions, &mut report)?;
        write_table(&out_dir, EntityKind::TransactionItem, &dataset.items, &mut report)?;

        let manifest = DatasetManifest::build(Utc::now(), &dataset, &integrity);
        emit_manifest(&out_dir.join(MANIFEST_FILE), &manifest)?;

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            records = dataset.total_records(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            data_quality_score = integrity.data_quality_score.value(),
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir,
            dataset,
            integrity,
            manifest,
            report,
        })
    }
}

fn write_table<T: Serialize>(
    out_dir: &std::path::Path,
    kind: EntityKind,
    rows: &[T],
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let path = out_dir.join(kind.file_name());
    let bytes = write_table_csv(&path, kind.columns(), rows)?;
    report.record_table(kind.table_name(), rows.len(), bytes);
    info!(table = kind.table_name(), rows = rows.len(), bytes, "table written");
    Ok(())
}
