//! Staging loaders for generated shopseed datasets.
//!
//! A loader lands the four tables in the `staging` schema inside one
//! transaction, running ensure-table, truncate and append for each table in
//! that order. Any failure rolls the whole batch back.

pub mod adapter;
pub mod errors;
pub mod postgres;
pub mod steps;
pub mod tables;

pub use adapter::{LoadReport, StagingLoader, TableLoad};
pub use errors::LoadError;
pub use postgres::PostgresStagingLoader;
pub use steps::LoadStep;
pub use tables::{STAGING_SCHEMA, STAGING_TABLES, StagingTable};
