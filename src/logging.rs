use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialise logging. In debug mode the default level is `debug`, otherwise
/// `info`. The level can be overridden via the `RUST_LOG` environment
/// variable only when debug logging is enabled.
///
/// When `log_file` is given, output is also appended to that file.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    let result = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "multi_slider.log".into());
            let appender = tracing_appender::rolling::never(dir, name);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(appender))
                .try_init()
        }
        None => registry.try_init(),
    };

    if result.is_err() {
        tracing::debug!("global logger already installed");
    }
}
