use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of the tracing subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the global subscriber once with a stdout writer; later calls are ignored.
///
/// Respects `RUST_LOG` if set.
/// `default_level` is an `EnvFilter` directive used when `RUST_LOG` is unset,
/// e.g. `"info"` or `"info,service::inventory=debug"`.
pub fn init_logging(format: LogFormat, default_level: &str) {
    let builder = fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
