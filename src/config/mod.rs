//! Configuration loaded from `~/.config/rootstate/config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, ResetConfig};
