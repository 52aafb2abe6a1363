//! depcon - terminal console for a software deployment tracking platform
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use url::Url;

use depcon_api::{ApiClient, Session, TokenStore};
use depcon_core::prelude::*;

/// depcon - terminal console for a software deployment tracking platform
#[derive(Parser, Debug)]
#[command(name = "depcon")]
#[command(about = "Terminal console for a software deployment tracking platform", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logging goes to a file: the TUI owns stdout
    depcon_core::logging::init()?;

    let settings = depcon_app::load_settings(args.config.as_deref());
    let base_url = args.server.unwrap_or(settings.server.base_url);
    let base_url = Url::parse(&base_url).map_err(|_| {
        eprintln!("Invalid server URL: {base_url}");
        Error::InvalidServerUrl { url: base_url.clone() }
    })?;
    info!("Backend: {}", base_url);

    let session = Session::new(TokenStore::new(TokenStore::default_path()));
    let api = Arc::new(ApiClient::new(base_url, session)?);

    let result = depcon_tui::run(api).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("depcon exiting");
    result
}
