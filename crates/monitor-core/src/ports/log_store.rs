//! Log store trait definition.
//!
//! This port defines the interface for the append-only record store.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::{LogRecord, NewLogRecord};

/// Append-only persistence for log records.
///
/// # Design Rules
///
/// - Records are never reordered, updated or removed once appended
/// - The store assigns the record timestamp at write time
/// - `read_all` returns the persisted bytes verbatim, in write order
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogStorePort: Send + Sync {
    /// Append one record, returning it with its assigned timestamp.
    async fn append(&self, record: NewLogRecord) -> Result<LogRecord, StoreError>;

    /// Read the full persisted content.
    async fn read_all(&self) -> Result<Vec<u8>, StoreError>;

    /// Flush and release the underlying resource.
    ///
    /// Further appends fail with [`StoreError::Closed`]. Closing twice is a no-op.
    async fn close(&self) -> Result<(), StoreError>;

    /// Human-readable location of the store, for diagnostics.
    fn location(&self) -> String;
}
