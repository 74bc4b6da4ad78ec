//! CLI command definitions and dispatch.

pub mod config;
pub mod generate;
pub mod select;
pub mod serve;
pub mod settings;
pub mod tree;

use clap::{Parser, Subcommand};

use launcher_core::config::AppConfig;
use launcher_core::error::AppError;
use launcher_service::{SelectionService, SettingsLocations, SettingsStore};
use launcher_storage::PathGuard;

use crate::output::OutputFormat;

/// Subgen Launcher: browse a media library and queue subtitle generation
#[derive(Debug, Parser)]
#[command(name = "launcher", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (overrides `--env`)
    #[arg(short, long, env = "LAUNCHER_CONFIG")]
    pub config: Option<String>,

    /// Configuration environment overlay (`config/{env}.toml`)
    #[arg(short, long, env = "LAUNCHER_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Print the content tree
    Tree(tree::TreeArgs),
    /// Show, change or migrate the stored settings
    Settings(settings::SettingsArgs),
    /// Validate a selection
    Select(select::SelectArgs),
    /// Send a subtitle batch request for a selection
    Generate(generate::GenerateArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Tree(args) => tree::execute(args, &config, self.format).await,
            Commands::Settings(args) => settings::execute(args, &config, self.format).await,
            Commands::Select(args) => select::execute(args, &config, self.format).await,
            Commands::Generate(args) => generate::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, self.format).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        match &self.config {
            Some(path) => AppConfig::load_file(path),
            None => AppConfig::load(&self.env),
        }
    }
}

/// Helper: settings store at the configured locations
pub fn settings_store(config: &AppConfig) -> SettingsStore {
    SettingsStore::new(SettingsLocations::from_config(&config.paths))
}

/// Helper: selection service over the configured content root
pub fn selection_service(config: &AppConfig) -> Result<SelectionService, AppError> {
    Ok(SelectionService::new(PathGuard::new(
        config.paths.content_root(),
    )?))
}
