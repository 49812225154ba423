#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod shutdown;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, ServerConfig, bootstrap, serve, start_server, start_server_with_shutdown,
};
pub use cli::{Cli, init_tracing};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
