//! Logging system initialization
//!
//! Builds the global tracing subscriber from the `[logging]` section of the
//! configuration: console or file output, optional daily rotation, text or
//! JSON formatting.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the logging system based on configuration.
///
/// Must be called exactly once, after the configuration has been loaded and
/// before the first log line is emitted.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If creating the log appender fails
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(build_writer(config));
    let filter = EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_to_console(config));

    if config.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}

fn log_to_console(config: &LoggingConfig) -> bool {
    config.file.as_ref().is_none_or(|f| f.is_empty())
}

fn build_writer(config: &LoggingConfig) -> Box<dyn std::io::Write + Send + Sync> {
    let log_file = match config.file {
        Some(ref f) if !f.is_empty() => f,
        // 未配置日志文件则输出到控制台
        _ => return Box::new(std::io::stdout()),
    };

    if config.enable_rotation {
        let path = std::path::Path::new(log_file);
        let dir = match path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d,
            _ => std::path::Path::new("."),
        };
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("linkpress.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        Box::new(appender)
    } else {
        // 不滚动时直接追加写
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        Box::new(file)
    }
}
