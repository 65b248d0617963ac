//! Compute primitives for sequence analysis
//!
//! This module provides the motif-finding and sequence-comparison toolkit
//! together with composition statistics and codon translation.

pub mod motif;
pub mod string_ops;
pub mod codon;

/// Compute operation result type
pub type ComputeResult<T> = Result<T, ComputeError>;

/// Error types for compute operations
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),
}
