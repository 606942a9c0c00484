//! Process bootstrap for brandkit.
//!
//! [`BKAppContext`] loads settings, installs the logger, opens the database,
//! starts the web server and tears everything down again on a signal.
mod logger;

pub use brandkit_error::{BKError, BKResult};
pub use logger::Logger;

use brandkit_models::{constants::DATA_DIR, settings::Settings, DbManager, WebServer};
use std::{
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, span, Level};

pub struct BKAppContext {
    settings: Settings,
    /// Keeps the file writer flushing until the context drops.
    _logger: Logger,
    db_manager: Arc<dyn DbManager>,
    web_server: Option<Arc<dyn WebServer>>,
    /// Flag to prevent duplicate shutdowns
    shutting_down: AtomicBool,
    shutdown_token: CancellationToken,
}

impl BKAppContext {
    /// Builds the application context.
    ///
    /// Settings are loaded before anything else so the runtime directory is
    /// applied before the logger opens `logs/` and the database opens `data/`.
    ///
    /// # Arguments
    /// * `config` - Path of the TOML configuration file; a missing file means defaults.
    pub async fn init<D, W>(config: String) -> BKResult<Self>
    where
        D: DbManager + 'static,
        W: WebServer + 'static,
    {
        let mut logger = Logger::new(if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        });

        let settings = Settings::new(config)?;
        apply_runtime_dir(&settings.general.runtime_dir)?;
        logger.initialize()?;

        let span = span!(Level::INFO, "init-app");
        let _guard = span.enter();

        ensure_runtime_directories()?;

        let db_manager: Arc<dyn DbManager> = D::init(&settings).await?;
        info!("Database initialized successfully.");

        let mut ctx = BKAppContext {
            settings,
            _logger: logger,
            db_manager,
            web_server: None,
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
        };
        ctx.init_web_server::<W>().await?;
        Ok(ctx)
    }

    async fn init_web_server<W: WebServer + 'static>(&mut self) -> BKResult<()> {
        self.web_server = Some(W::init(&self.settings, Arc::clone(&self.db_manager)).await?);
        info!("Web server initialized successfully.");
        Ok(())
    }

    /// Ends [`BKAppContext::run`] as if a termination signal had arrived.
    #[inline]
    pub fn shutdown(&self) {
        self.shutdown_token.cancel();
    }

    /// Blocks until a termination signal arrives, then shuts down.
    pub async fn run(&self) -> BKResult<()> {
        self.wait_for_shutdown().await?;
        self.graceful_shutdown().await
    }

    async fn wait_for_shutdown(&self) -> BKResult<()> {
        let shutdown_token = self.shutdown_token.clone();

        #[cfg(unix)]
        {
            let mut sigterm = signal(SignalKind::terminate())?;
            let mut sigint = signal(SignalKind::interrupt())?;
            let mut sighup = signal(SignalKind::hangup())?;

            tokio::select! {
                _ = sigterm.recv() => {
                    info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    info!("Received SIGINT signal");
                }
                _ = sighup.recv() => {
                    info!("Received SIGHUP signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        #[cfg(windows)]
        {
            tokio::select! {
                _ = ctrl_c() => {
                    info!("Received ctrl-c signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        Ok(())
    }

    /// Stops the web server, then closes the database.
    #[instrument(name = "graceful-shutdown", skip_all)]
    pub async fn graceful_shutdown(&self) -> BKResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        info!("Starting graceful shutdown...");
        // in-flight requests may still need the pool
        if let Some(web_server) = &self.web_server {
            if let Err(e) = web_server.stop().await {
                tracing::warn!(error = %e, "Web server did not stop cleanly");
            }
        }
        self.db_manager
            .close()
            .await
            .map_err(|e| BKError::ShutdownError(e.to_string()))?;

        info!("Graceful shutdown completed successfully");
        Ok(())
    }
}

fn apply_runtime_dir(runtime_dir: &str) -> BKResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| BKError::from(format!("Failed to create runtime_dir {dir}: {e}")))?;
    std::env::set_current_dir(dir).map_err(|e| {
        BKError::from(format!("Failed to set current_dir to runtime_dir {dir}: {e}"))
    })?;
    Ok(())
}

/// Creates the sqlite data directory under the runtime root.
fn ensure_runtime_directories() -> BKResult<()> {
    let dir = Path::new(DATA_DIR);
    std::fs::create_dir_all(dir).map_err(|e| {
        BKError::from(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;
    info!("Runtime directories ensured under {}", DATA_DIR);
    Ok(())
}
