//! Core contracts for shopseed.
//!
//! This crate defines the four entity records, their fixed enumerations,
//! id formats, money helpers and the run configuration shared by the
//! generator, the validator, the loader and the CLI.

pub mod config;
pub mod entities;
pub mod error;
pub mod ids;
pub mod money;
pub mod types;

pub use config::{DEFAULT_CONFIG_PATH, RecordCounts, ShopseedConfig, load_config};
pub use entities::{Customer, Dataset, Product, Transaction, TransactionItem};
pub use error::ConfigError;
pub use ids::{EntityKind, format_id};
pub use money::{line_total, round2};
pub use types::{AgeGroup, CATEGORIES, Discount, PaymentMethod, SUPPLIER_POOL_SIZE, sub_categories};

/// File name of the dataset manifest written next to the tables.
pub const MANIFEST_FILE: &str = "generation_metadata.json";
