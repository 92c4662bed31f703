// crates/framematch-ui/src/telemetry.rs
//
// Logging setup. Release builds on Windows run without a console, so a copy
// of every event also goes to `framematch.log` in the OS temp directory.
//
// Filter: FRAMEMATCH_LOG, then RUST_LOG, then LogConfig::default_level.
//   FRAMEMATCH_LOG=debug
//   FRAMEMATCH_LOG=info,framematch_net=debug

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub console_enabled: bool,
    pub file_enabled:    bool,
    /// Defaults to `<temp>/framematch.log`.
    pub file_path:       Option<PathBuf>,
    pub default_level:   String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_enabled: true,
            file_enabled:    true,
            file_path:       None,
            default_level:   "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn resolved_file_path(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("framematch.log"))
    }
}

/// Each run starts a fresh log; the previous session's file is replaced.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    File::create(path)
}

/// Install the global subscriber. The returned guard must outlive the app.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_env("FRAMEMATCH_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));

    let console_layer = config.console_enabled.then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .compact()
    });

    let mut guard = None;
    let file_layer = if config.file_enabled {
        let path = config.resolved_file_path();
        let file = open_log_file(&path)?;
        let (writer, g) = tracing_appender::non_blocking(file);
        guard = Some(g);
        Some(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        file = ?config.file_enabled.then(|| config.resolved_file_path().display().to_string()),
        "logging initialized"
    );
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logs_to_temp_dir() {
        let config = LogConfig::default();
        assert!(config.console_enabled);
        assert!(config.file_enabled);
        assert_eq!(config.default_level, "info");
        assert_eq!(config.resolved_file_path(), std::env::temp_dir().join("framematch.log"));
    }

    #[test]
    fn log_file_does_not_grow_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("framematch.log");
        std::fs::write(&path, vec![b'x'; 4096]).unwrap();

        let file = open_log_file(&path).unwrap();
        assert_eq!(file.metadata().unwrap().len(), 0);
    }

    #[test]
    fn explicit_file_path_wins() {
        let config = LogConfig { file_path: Some(PathBuf::from("/tmp/x.log")), ..Default::default() };
        assert_eq!(config.resolved_file_path(), PathBuf::from("/tmp/x.log"));
    }
}
