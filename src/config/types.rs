use serde::{Deserialize, Serialize};

use crate::actions::types::SIGNOUT;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reset: ResetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which signals wipe the state tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetConfig {
    /// Signal kinds that trigger a full reset (default: `["SIGNOUT"]`).
    #[serde(default = "default_reset_signals")]
    pub signals: Vec<String>,
}

/// Logging defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            signals: default_reset_signals(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_reset_signals() -> Vec<String> {
    vec![SIGNOUT.to_string()]
}

fn default_log_filter() -> String {
    "info".to_string()
}
