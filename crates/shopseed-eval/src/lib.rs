//! Integrity validation and dataset manifests for shopseed.

pub mod consistency;
pub mod errors;
pub mod integrity;
pub mod manifest;
pub mod reader;

pub use consistency::{ConsistencyReport, check_consistency};
pub use errors::EvalError;
pub use integrity::{
    IntegrityReport, OrphanRecords, QualityScore, ScoringPolicy, validate_dataset,
    validate_referential_integrity,
};
pub use manifest::{DatasetManifest, ManifestRecordCounts, emit_manifest, normalize_json};
pub use reader::read_dataset;
