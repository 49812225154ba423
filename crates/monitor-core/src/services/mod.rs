//! Application services.
//!
//! Services orchestrate domain logic on top of the ports and are what the
//! adapters call.

mod log_service;

pub use log_service::LogService;
