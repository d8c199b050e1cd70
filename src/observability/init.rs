//! Tracing initialization and subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes a formatted tracing subscriber filtered by the configured level.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (any `EnvFilter` directive, e.g. `"debug"`
///    or `"civiclists=trace"`)
/// 2. Default: `"info"`
///
/// Idempotent: only the first subscriber registered in a process takes effect,
/// so a host that already installed its own is left undisturbed.
///
/// # Example
///
/// ```
/// use civiclists::{init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
