//! Domain types for the log sink.
//!
//! These types are independent of the HTTP adapter and of the file layout
//! used by the storage adapter.

mod payload;
mod record;

pub use payload::{MESSAGE_KEY, MessagePayload};
pub use record::{LogRecord, NewLogRecord, UNKNOWN_MESSAGE_TYPE_KEY};
