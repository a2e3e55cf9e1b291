//! Error types for the drape simulator.
//!
//! All crates return `DrapeResult<T>` from fallible operations. The physics
//! itself never fails once a simulation has been constructed; errors come
//! from startup configuration, snapshots, and file I/O.

use thiserror::Error;

/// Unified error type for drape.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid dimensions or per-particle buffers are inconsistent.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A simulation invariant was violated (e.g. a snapshot from a different grid).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
