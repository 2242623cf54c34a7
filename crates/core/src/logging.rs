use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".layermap/logs")
}

/// Prefix of the daily log files written for `component`.
pub fn log_file_prefix(component: &str) -> String {
    format!("layermap-{}", component)
}

/// Installs the global subscriber: a daily file `layermap-<component>.<date>.log`
/// under [`log_dir`], plus stderr unless `to_stderr` is false.
///
/// Without a writable log directory only stderr output is kept. The returned
/// guard flushes the file writer on drop.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    let _ = std::fs::create_dir_all(&dir);

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_prefix(component))
        .filename_suffix("log")
        .build(&dir);
    let (file_writer, guard) = match appender {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(_) => tracing_appender::non_blocking(std::io::sink()),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_files_live_under_layermap_dir() {
        assert!(log_dir().ends_with(".layermap/logs"));
        assert_eq!(log_file_prefix("cli"), "layermap-cli");
    }
}
