//! Configuration and host-system integration.

pub mod config;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
