use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum TraceInitError {
    ParseError(#[from] tracing_subscriber::filter::ParseError),
    TryInitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Log to stderr so stdout only carries command output. `RUST_LOG`
/// overrides the default level.
pub fn init() -> Result<(), TraceInitError> {
    let env_filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))?;
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter_layer)
        .try_init()?;

    Ok(())
}
