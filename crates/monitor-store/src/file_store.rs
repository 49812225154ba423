//! Append-only file implementation of `LogStorePort`.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use monitor_core::ports::{LogStorePort, StoreError};
use monitor_core::{LogRecord, NewLogRecord, OpenMode, StoreOptions};

/// Log store backed by a single append-only file.
///
/// The handle is opened once and held until [`LogStorePort::close`]. `None`
/// in the slot means the store has been closed.
#[derive(Debug)]
pub struct FileLogStore {
    path: PathBuf,
    file: Mutex<Option<File>>,
    sync_writes: bool,
}

impl FileLogStore {
    /// Open (or create) the log file at `path`.
    ///
    /// Missing parent directories are created. With [`OpenMode::Truncate`]
    /// any previous content is discarded.
    pub async fn open(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(storage_error("create directory for", &path))?;
        }

        let mut open = OpenOptions::new();
        open.create(true);
        match options.open_mode {
            OpenMode::Truncate => open.write(true).truncate(true),
            OpenMode::Append => open.append(true),
        };
        let file = open
            .open(&path)
            .await
            .map_err(storage_error("open", &path))?;

        debug!(path = %path.display(), mode = ?options.open_mode, "Opened log file");

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
            sync_writes: options.sync_writes,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error<'a>(action: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> StoreError + 'a {
    move |e| StoreError::Storage(format!("Failed to {action} {}: {e}", path.display()))
}

#[async_trait]
impl LogStorePort for FileLogStore {
    async fn append(&self, record: NewLogRecord) -> Result<LogRecord, StoreError> {
        let mut slot = self.file.lock().await;
        let file = slot.as_mut().ok_or(StoreError::Closed)?;

        // Stamped under the lock so timestamps follow file order.
        let record = record.stamp(Utc::now());
        let line = record
            .to_line()
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(storage_error("append to", &self.path))?;
        file.flush()
            .await
            .map_err(storage_error("flush", &self.path))?;
        if self.sync_writes {
            file.sync_data()
                .await
                .map_err(storage_error("sync", &self.path))?;
        }

        Ok(record)
    }

    async fn read_all(&self) -> Result<Vec<u8>, StoreError> {
        let _slot = self.file.lock().await;
        fs::read(&self.path)
            .await
            .map_err(storage_error("read", &self.path))
    }

    async fn close(&self) -> Result<(), StoreError> {
        let Some(mut file) = self.file.lock().await.take() else {
            return Ok(());
        };

        file.flush()
            .await
            .map_err(storage_error("flush", &self.path))?;
        file.sync_all()
            .await
            .map_err(storage_error("sync", &self.path))?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
