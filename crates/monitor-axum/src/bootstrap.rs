//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The file store is instantiated here and handed to
//! `LogService`; handlers only ever see the service.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use monitor_core::{
    DEFAULT_HOST, DEFAULT_PORT, LogService, OpenMode, Settings, validate_settings,
};
use monitor_store::setup_log_store;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::routes::create_router;
use crate::shutdown::shutdown_signal;

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server. `0` picks an ephemeral port.
    pub port: u16,
    /// Store and request settings.
    pub settings: Settings,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            settings: Settings::with_defaults(),
        }
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.log_file = path.into();
        self
    }

    /// Keep existing log content instead of starting a fresh file.
    #[must_use]
    pub fn with_append(mut self, append: bool) -> Self {
        self.settings.store.open_mode = if append {
            OpenMode::Append
        } else {
            OpenMode::Truncate
        };
        self
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The log service owning the store.
    pub logs: Arc<LogService>,
    /// Upper bound on an ingest request body.
    pub max_body_bytes: usize,
    /// Echo every dump through `tracing`.
    pub echo_dump: bool,
}

impl AxumContext {
    /// Assemble a context around an already-built service.
    pub fn new(logs: LogService, settings: &Settings) -> Self {
        Self {
            logs: Arc::new(logs),
            max_body_bytes: settings.max_body_bytes,
            echo_dump: settings.echo_dump,
        }
    }
}

/// Validate the configuration and open the log store.
///
/// A store that cannot be opened is fatal: the error is returned to the
/// caller and no server is started.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let settings = &config.settings;
    validate_settings(settings).context("Invalid configuration")?;

    let store = setup_log_store(&settings.log_file, settings.store).await?;
    let logs = LogService::new(Arc::new(store));

    Ok(AxumContext::new(logs, settings))
}

/// Run the server on `listener` until `shutdown` is cancelled.
///
/// Shutdown is ordered: stop accepting connections, let in-flight requests
/// finish, then close the log store.
pub async fn serve(
    listener: TcpListener,
    ctx: AxumContext,
    shutdown: CancellationToken,
) -> Result<()> {
    let logs = Arc::clone(&ctx.logs);
    let app = create_router(ctx);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await;

    close_after_serving(served, &logs).await
}

/// Close the store whatever the outcome of serving, then report the first
/// failure.
async fn close_after_serving(served: std::io::Result<()>, logs: &LogService) -> Result<()> {
    match &served {
        Ok(()) => info!("HTTP server stopped, closing log store"),
        Err(e) => error!(error = %e, "HTTP server failed, closing log store"),
    }

    let closed = logs.shutdown().await;
    if let Err(e) = &closed {
        error!(error = %e, "Failed to close log store");
    }
    served.context("HTTP server error")?;
    closed?;
    Ok(())
}

/// Start the web server and block until a termination signal is handled.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    start_server_with_shutdown(config, shutdown_signal()).await
}

/// Start the web server, shutting down once `signal` resolves.
pub async fn start_server_with_shutdown<F>(config: ServerConfig, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let ctx = bootstrap(&config).await?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let local_addr = listener.local_addr()?;
    info!(
        addr = %local_addr,
        log_file = %ctx.logs.store_location(),
        "monitor listening"
    );

    let token = CancellationToken::new();
    tokio::spawn({
        let token = token.clone();
        async move {
            signal.await;
            info!("Shutdown requested");
            token.cancel();
        }
    });

    serve(listener, ctx, token).await?;
    info!("monitor stopped");
    Ok(())
}
