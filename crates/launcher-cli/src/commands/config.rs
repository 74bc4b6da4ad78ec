//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use launcher_core::config::AppConfig;
use launcher_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration as JSON
    Show,
    /// Check that configured paths exist
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        ConfigCommand::Validate => {
            let report = ValidationReport::from_config(config);
            match format {
                OutputFormat::Json => output::print_item(&report, format),
                OutputFormat::Table => report.print(),
            }
        }
    }

    Ok(())
}

/// Outcome of `config validate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Address the server binds to.
    pub server: String,
    /// Prefix the remote server sees for the content root.
    pub container_prefix: String,
    /// Configured directories and whether they exist.
    pub directories: Vec<DirectoryCheck>,
}

/// A configured directory and whether it is present.
#[derive(Debug, Serialize)]
pub struct DirectoryCheck {
    pub label: &'static str,
    pub path: String,
    pub exists: bool,
}

impl ValidationReport {
    /// Checks the directories named by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let directories = [
            ("Content", config.paths.content_root()),
            ("Settings", config.paths.config_root()),
            ("Static files", config.paths.public_root()),
        ]
        .into_iter()
        .map(|(label, path)| DirectoryCheck {
            label,
            exists: path.is_dir(),
            path: path.display().to_string(),
        })
        .collect();

        Self {
            server: config.server.bind_address(),
            container_prefix: config.remote.container_prefix.clone(),
            directories,
        }
    }

    fn print(&self) {
        output::print_kv("Server", &self.server);
        for dir in &self.directories {
            if dir.exists {
                output::print_kv(dir.label, &dir.path);
            } else {
                output::print_warning(&format!("{} directory missing: {}", dir.label, dir.path));
            }
        }
        output::print_kv("Container prefix", &self.container_prefix);
    }
}
