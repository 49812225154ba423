//! Runtime settings shared by the storage and HTTP adapters.

use std::path::PathBuf;

use thiserror::Error;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8100;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "monitor.log";

/// Default cap on a single request body (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// How the log file is opened at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Start from an empty file, discarding previous content.
    #[default]
    Truncate,
    /// Keep existing content and append after it.
    Append,
}

/// Options for opening a log store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub open_mode: OpenMode,
    /// `fsync` after every appended record.
    pub sync_writes: bool,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the append-only log file.
    pub log_file: PathBuf,
    /// Store open/flush behaviour.
    pub store: StoreOptions,
    /// Upper bound on an ingest request body.
    pub max_body_bytes: usize,
    /// Also emit every dump through `tracing` (the historical console echo).
    pub echo_dump: bool,
}

impl Settings {
    /// Create settings with default values.
    pub fn with_defaults() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            store: StoreOptions::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            echo_dump: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Settings validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Log file path cannot be empty")]
    EmptyLogFile,

    #[error("Max body size must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.log_file.as_os_str().is_empty() {
        return Err(SettingsError::EmptyLogFile);
    }

    if settings.max_body_bytes == 0 {
        return Err(SettingsError::ZeroBodyLimit);
    }

    Ok(())
}
