use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod formatter;

pub use formatter::*;

use crate::configs::LoggingConfig;

/// Builds the filter directive string from config. `RUST_LOG` still wins in [`init`].
pub fn filter_directives(config: &LoggingConfig) -> String {
    let level = config.level.as_deref().unwrap_or("info");
    match config.filters.as_deref() {
        Some(filters) if !filters.is_empty() => {
            format!("{},hyper=warn,reqwest=warn,{}", level, filters)
        }
        _ => format!("{},hyper=warn,reqwest=warn", level),
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let stdout_layer = fmt::layer()
        .event_format(CustomFormatter::new(config.ansi))
        .with_ansi(config.ansi);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init();
}
