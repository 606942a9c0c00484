use brandkit_error::{BKError, BKResult};
use brandkit_models::constants::{LOG_DIR, LOG_FILE_NAME};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Console and daily rolling file output for the whole process.
///
/// `RUST_LOG` overrides the default level when set.
pub struct Logger {
    level: Level,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Logger {
            level,
            _file_guard: None,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str().to_lowercase()))
    }

    /// Installs the global subscriber, writing `logs/brandkit.log.<date>`.
    pub fn initialize(&mut self) -> BKResult<()> {
        let (file_writer, guard) =
            tracing_appender::non_blocking(rolling::daily(LOG_DIR, LOG_FILE_NAME));
        self._file_guard = Some(guard);

        let debug = cfg!(debug_assertions);
        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_file(debug)
            .with_line_number(debug);
        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .with_target(true);

        let subscriber = Registry::default()
            .with(self.filter())
            .with(console_layer)
            .with(file_layer);
        set_global_default(subscriber).map_err(|_| BKError::from("Failed to set logger"))?;
        Ok(())
    }
}
