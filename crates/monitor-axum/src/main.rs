//! `monitor` entry point.

use clap::Parser;

use monitor_axum::{Cli, init_tracing, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so MONITOR_* from .env apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    start_server(cli.into_config()).await
}
