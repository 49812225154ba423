#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{LogRecord, MessagePayload, NewLogRecord};
pub use ports::{CoreError, LogStorePort, StoreError};
pub use services::LogService;
pub use settings::{
    DEFAULT_HOST, DEFAULT_LOG_FILE, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, OpenMode, Settings,
    SettingsError, StoreOptions, validate_settings,
};

#[cfg(test)]
use tokio as _;
