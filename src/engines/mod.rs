//! Engine layer
//!
//! Low-level building blocks: sequence computations, file access and
//! sequence file formats.

pub mod core;
pub mod compute;
pub mod storage;

/// Engine operation result type
pub type EngineResult<T> = Result<T, EngineError>;

/// Error types for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid sequence data: {0}")]
    InvalidSequenceData(String),
}
