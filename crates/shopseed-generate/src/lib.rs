//! Deterministic generation of the shopseed e-commerce dataset.
//!
//! Customers and products are synthesized independently, transactions
//! sample the customer set, and line items sample products per transaction
//! before back-filling each transaction total. The engine then validates
//! the collections and writes four CSV tables plus a JSON manifest.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, TableReport};
