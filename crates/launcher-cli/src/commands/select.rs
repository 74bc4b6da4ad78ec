//! Selection validation from the command line.

use clap::Args;

use launcher_core::config::AppConfig;
use launcher_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the select command
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Path relative to the content root
    #[arg(default_value = "")]
    pub path: String,
}

/// Execute the select command
pub async fn execute(
    args: &SelectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let selection = super::selection_service(config)?.select(&args.path)?;
    output::print_item(&selection, format);
    Ok(())
}
