use brandkit_common::BKAppContext;
use brandkit_error::{BKError, BKResult};
use brandkit_models::constants::DEFAULT_CONFIG_FILE_NAME;
use brandkit_storage::BKDbManager;
use brandkit_web::BKWebServer;
use clap::Parser;
use std::{env::current_dir, path::PathBuf};

/// brandkit - brand voice workspace
///
/// Serves the brand personality questionnaire, the three brand adjectives
/// and the writing rules over a JSON API backed by sqlite.
#[derive(Parser)]
#[command(name = "brandkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "brandkit", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, looks for 'brandkit.toml' in the current working
    /// directory. A missing file means built-in defaults.
    #[arg(short, long, env = "BK_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> BKResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| BKError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let ctx = BKAppContext::init::<BKDbManager, BKWebServer>(
        config_path.to_string_lossy().to_string(),
    )
    .await?;

    // Run the application until shutdown signal is received
    ctx.run().await
}
