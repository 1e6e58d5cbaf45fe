//! Processos dashboard native client
//!
//! Drives the shared view controller from the command line against the
//! processos HTTP API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mock;
pub mod render;
pub mod session;
