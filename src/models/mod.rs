//! Database models and runtime configuration.

pub mod client;
#[cfg(feature = "server")]
pub mod config;
