//! Log service - the ingest and dump operations behind the HTTP handlers.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{LogRecord, MessagePayload, NewLogRecord};
use crate::ports::{CoreError, LogStorePort};

/// Service owning the log store.
///
/// Adapters hold this behind an `Arc` and share it across request handlers.
pub struct LogService {
    store: Arc<dyn LogStorePort>,
}

impl LogService {
    /// Create a new log service over the given store.
    pub fn new(store: Arc<dyn LogStorePort>) -> Self {
        Self { store }
    }

    /// Decode `body` and append exactly one record for `id`.
    ///
    /// Unrecognised bodies are stored as unknown-type records rather than
    /// rejected.
    pub async fn ingest(&self, id: &str, body: &[u8]) -> Result<LogRecord, CoreError> {
        let payload = MessagePayload::decode(body);
        if payload.is_unknown() {
            debug!(id, bytes = body.len(), "Unrecognised message body, storing raw");
        }

        let record = self.store.append(NewLogRecord::new(id, payload)).await?;
        debug!(id, time = %record.time, "Appended log record");
        Ok(record)
    }

    /// Full store content, verbatim.
    pub async fn dump(&self) -> Result<Vec<u8>, CoreError> {
        Ok(self.store.read_all().await?)
    }

    /// Close the underlying store. Called once in-flight requests have drained.
    pub async fn shutdown(&self) -> Result<(), CoreError> {
        self.store.close().await?;
        info!(store = %self.store.location(), "Log store closed");
        Ok(())
    }

    /// Location of the underlying store.
    pub fn store_location(&self) -> String {
        self.store.location()
    }
}
