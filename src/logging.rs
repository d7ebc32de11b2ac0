use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming a file to write logs to instead of stderr.
pub const LOG_FILE_ENV: &str = "ROOTSTATE_LOG";

/// Initialize tracing.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr, or to the
/// file named by `ROOTSTATE_LOG` when it is set. stdout is left alone since
/// the CLI prints state snapshots there.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() {
        let Ok(file) = std::fs::File::create(&log_path) else {
            eprintln!("Warning: Failed to create log file: {}", log_path);
            return;
        };

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .try_init();
        return;
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
