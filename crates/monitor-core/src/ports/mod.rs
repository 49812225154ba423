//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod log_store;

use thiserror::Error;

pub use log_store::LogStorePort;

#[cfg(test)]
pub use log_store::MockLogStorePort;

/// Domain-specific errors for log store operations.
///
/// Abstracts away the storage backend so services and adapters never see
/// `std::io` types directly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend error (open, write, flush or read failed).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A record could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store has been closed and accepts no more writes.
    #[error("Log store is closed")]
    Closed,
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// process exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Log store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
