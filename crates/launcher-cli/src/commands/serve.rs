//! Start the launcher server.

use clap::Args;

use launcher_core::config::AppConfig;
use launcher_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the content directory
    #[arg(long)]
    pub content_dir: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref dir) = args.content_dir {
        config.paths.content_dir = dir.clone();
    }

    println!("Starting Subgen Launcher...");
    println!("  Address: http://{}", config.server.bind_address());
    println!("  Content: {}", config.paths.content_root().display());

    launcher_api::run_server(config, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    })
    .await
}
