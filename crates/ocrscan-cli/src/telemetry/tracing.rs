//! Tracing initialization and configuration.

use std::io::{self, IsTerminal};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Filter used when `RUST_LOG` is unset.
pub(super) const DEFAULT_DIRECTIVES: &str =
    "warn,ocrscan_cli=info,ocrscan_batch=info,ocrscan_gemini=info,ocrscan_core=info";

/// Initializes the tracing subscriber for structured logging.
///
/// # Configuration
///
/// The log level can be configured via the `RUST_LOG` environment variable.
/// If not set, [`DEFAULT_DIRECTIVES`] applies: `info` for the ocrscan crates,
/// `warn` for everything else (HTTP stack included).
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug ocrscan
/// RUST_LOG=ocrscan_batch=debug,ocrscan_gemini=trace ocrscan
/// ```
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub(super) fn init_tracing() -> anyhow::Result<()> {
    let env_filter = create_env_filter()?;
    let fmt_layer = create_fmt_layer();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(())
}

/// Creates an environment filter for tracing.
fn create_env_filter() -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))
}

/// Creates a formatted tracing layer.
///
/// Colors are only used when stderr is a terminal, so redirected logs stay
/// plain text.
fn create_fmt_layer() -> impl Layer<Registry> {
    fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(io::stderr().is_terminal())
}
