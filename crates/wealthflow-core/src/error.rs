// File: crates/wealthflow-core/src/error.rs
// Summary: Error type shared by every transform in the core crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Degenerate scale domain (`min == max`) or a non-finite bound.
    #[error("degenerate scale domain [{min}, {max}]")]
    Domain { min: f64, max: f64 },

    #[error("record {key} has no field '{field}'")]
    FieldMissing { key: i32, field: String },

    #[error("annual income must be a finite non-negative number, got {0}")]
    InvalidIncome(f64),

    /// A link endpoint that does not name a node in the diagram.
    #[error("link {from} -> {to} references unknown node '{node}'")]
    UnknownNode { node: String, from: String, to: String },

    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    #[error("record keys must be strictly ascending: {previous} followed by {key}")]
    UnsortedRecords { previous: i32, key: i32 },

    #[error("allocation fractions sum to {actual}, expected {expected}")]
    AllocationMismatch { expected: f64, actual: f64 },

    #[error("allocation fraction for '{category}' out of range: {fraction}")]
    InvalidFraction { category: String, fraction: f64 },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("transfer rate must be a finite positive amount per second, got {0}")]
    InvalidRate(f64),

    #[error("tick interval must be between 1ms and 1s, got {0:?}")]
    InvalidInterval(std::time::Duration),

    #[error("fixture {name}: {message}")]
    Fixture { name: &'static str, message: String },

    #[error("fixture csv: {0}")]
    Csv(#[from] csv::Error),
}
