//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::{expand_tilde, get_data_dir};
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
const LOG_FILE_NAME: &str = "urbanfy.log";

/// Installs the global tracing subscriber.
///
/// Level resolution, highest priority first:
/// 1. `RUST_LOG`
/// 2. `config.trace_level`
/// 3. `"info"` (also used when the configured directive does not parse)
///
/// Output goes to `config.log_file` when set, else to `urbanfy.log` in the
/// data directory, and to stderr only when neither location is usable.
///
/// Idempotent: only the first call installs a subscriber. Returns whether
/// this call did.
///
/// # Example
///
/// ```rust
/// use urbanfy::observability::init_tracing;
/// use urbanfy::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     log_file: Some(dir.path().join("test.log").display().to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::info!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.trace_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, ansi) = match log_path(config) {
        Some(path) => (BoxMakeWriter::new(FileWriter::new(path)), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}

/// Resolves the log file, creating its directory. `None` means stderr.
fn log_path(config: &Config) -> Option<PathBuf> {
    let path = config.log_file.as_deref().map_or_else(
        || get_data_dir().join(LOG_FILE_NAME),
        |file| PathBuf::from(expand_tilde(file)),
    );

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).ok()?;
        }
        _ => {}
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("app.log");
        let config = Config {
            log_file: Some(file.display().to_string()),
            ..Config::default()
        };

        assert_eq!(log_path(&config), Some(file.clone()));
        assert!(file.parent().unwrap().is_dir());
    }
}
