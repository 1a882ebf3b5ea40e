use anyhow::{Result, anyhow};
use render_modes_core::config::{LogFormat, LoggingConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Install the global tracing subscriber.
///
/// Logs go to stderr so `render` output on stdout stays clean. `RUST_LOG`
/// overrides the configured level.
pub fn init(logging: &LoggingConfig) -> Result<()> {
    let level: LevelFilter = logging
        .level
        .as_str()
        .parse()
        .map_err(|err| anyhow!("invalid log level '{}': {}", logging.level, err))?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
