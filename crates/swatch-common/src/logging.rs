//! Logger initialization.
//!
//! Libraries in this workspace only use the `log` facade; binaries call
//! [`init_logging`] once, early in `main`.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "swatch_sampler=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter; overrides `RUST_LOG` when set.
    pub env_filter: Option<String>,
    /// ANSI coloring behavior.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored, as is a logger that was already installed
/// by someone else (e.g. a test harness).
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            let _ = builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            let _ = builder.parse_filters(&filter);
        } else {
            // Sampling is quiet by default; only surface bad input.
            let _ = builder.filter_level(log::LevelFilter::Warn);
        }

        let _ = builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
