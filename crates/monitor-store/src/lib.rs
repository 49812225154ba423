#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod file_store;
pub mod setup;

pub use file_store::FileLogStore;
pub use setup::setup_log_store;
