//! Subtitle batch dispatch from the command line.

use std::sync::Arc;

use clap::Args;

use launcher_core::config::AppConfig;
use launcher_core::error::AppError;
use launcher_service::{DispatchService, SubgenClient};

use crate::output::{self, OutputFormat};

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path relative to the content root
    #[arg(default_value = "")]
    pub path: String,

    /// Print the request URL without sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the generate command
pub async fn execute(
    args: &GenerateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = DispatchService::new(
        Arc::new(super::selection_service(config)?),
        Arc::new(super::settings_store(config)),
        SubgenClient::new(&config.remote)?,
        config.remote.container_prefix.clone(),
    );

    if args.dry_run {
        let (_, job) = service.prepare(&args.path)?;
        output::print_kv("URL", job.url.as_str());
        output::print_kv("Directory", &job.directory);
        output::print_kv("Language", job.language.code());
        return Ok(());
    }

    let outcome = service.generate(args.path.clone()).await?;
    if (200..300).contains(&outcome.remote_status) {
        output::print_success("Subtitle batch requested");
    } else {
        output::print_warning(&format!(
            "Subtitle server answered with status {}",
            outcome.remote_status
        ));
    }
    output::print_item(&outcome, format);
    Ok(())
}
