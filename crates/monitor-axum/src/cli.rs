//! Command-line parsing and diagnostic logging setup for the `monitor` binary.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use monitor_core::{DEFAULT_HOST, DEFAULT_LOG_FILE, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
use tracing_subscriber::EnvFilter;

use crate::bootstrap::ServerConfig;

/// HTTP log sink: `PUT /log/{id}` appends a record, `GET /logs` returns the log file.
///
/// Every option can also be set through the environment (or a `.env` file).
/// Switches read from the environment accept `true`/`false`, `yes`/`no`,
/// `on`/`off` and `1`/`0`.
#[derive(Debug, Parser)]
#[command(name = "monitor")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "MONITOR_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, env = "MONITOR_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Append-only log file
    #[arg(long = "log-file", env = "MONITOR_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Keep existing log content instead of starting a fresh file
    #[arg(long, env = "MONITOR_APPEND", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub append: bool,

    /// fsync the log file after every record
    #[arg(long = "sync", env = "MONITOR_SYNC", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub sync_writes: bool,

    /// Maximum accepted request body size in bytes
    #[arg(long = "max-body-bytes", env = "MONITOR_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Also print every GET /logs dump to the diagnostic log
    #[arg(long = "echo-dump", env = "MONITOR_ECHO_DUMP", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub echo_dump: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Build the server configuration from parsed arguments.
    pub fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::with_defaults()
            .with_log_file(self.log_file)
            .with_append(self.append);
        config.host = self.host;
        config.port = self.port;
        config.settings.store.sync_writes = self.sync_writes;
        config.settings.max_body_bytes = self.max_body_bytes;
        config.settings.echo_dump = self.echo_dump;
        config
    }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
