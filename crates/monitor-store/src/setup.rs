//! Log store setup for entry points.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use monitor_core::StoreOptions;

use crate::file_store::FileLogStore;

/// Open the log store at `log_file`.
///
/// A failure here is fatal for the caller: the service cannot run without
/// its store.
///
/// # Example
///
/// ```rust,no_run
/// use monitor_core::StoreOptions;
/// use monitor_store::setup_log_store;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let store = setup_log_store(Path::new("monitor.log"), StoreOptions::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_log_store(log_file: &Path, options: StoreOptions) -> Result<FileLogStore> {
    let store = FileLogStore::open(log_file, options)
        .await
        .with_context(|| format!("Failed to open log store at {}", log_file.display()))?;

    info!(
        target: "monitor.store",
        path = %log_file.display(),
        mode = ?options.open_mode,
        sync_writes = options.sync_writes,
        "Log store ready"
    );

    Ok(store)
}
