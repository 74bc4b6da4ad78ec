//! Settings management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use launcher_core::config::AppConfig;
use launcher_core::error::AppError;
use launcher_core::types::Language;
use launcher_service::{MigrationOutcome, SettingsInput};

use crate::output::{self, OutputFormat};

/// Arguments for settings commands
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Settings subcommand
    #[command(subcommand)]
    pub command: SettingsCommand,
}

/// Settings subcommands
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the stored settings (migrating a legacy file if needed)
    Show,
    /// Replace the stored settings
    ///
    /// Omitted fields are cleared, matching a save from the web page.
    Set {
        /// Subtitle server host
        #[arg(long)]
        host: Option<String>,
        /// Subtitle server port
        #[arg(long)]
        port: Option<String>,
        /// Default language, by name or code
        #[arg(long)]
        language: Option<String>,
    },
    /// Move a legacy settings file to the canonical location
    Migrate,
    /// List supported languages
    Languages,
}

/// A supported language
#[derive(Debug, Serialize, Tabled)]
pub struct LanguageRow {
    #[tabled(rename = "Code")]
    pub code: &'static str,
    #[tabled(rename = "Language")]
    pub name: &'static str,
}

/// Execute settings commands
pub async fn execute(
    args: &SettingsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::settings_store(config);

    match &args.command {
        SettingsCommand::Show => match store.try_load()? {
            Some(settings) => output::print_item(&settings, format),
            None => {
                output::print_warning("No settings stored yet; showing defaults");
                output::print_item(&launcher_core::types::Settings::default(), format);
            }
        },
        SettingsCommand::Set {
            host,
            port,
            language,
        } => {
            let input =
                SettingsInput::from_text(host.as_deref(), port.as_deref(), language.as_deref());
            let saved = store.save(&input)?;
            if port.is_some() && saved.server_port.is_empty() {
                output::print_warning("Port was not a number in 1-65535 and has been cleared");
            }
            output::print_success(&format!(
                "Settings saved to {}",
                store.locations().canonical.display()
            ));
            output::print_item(&saved, format);
        }
        SettingsCommand::Migrate => match store.migrate_legacy()? {
            MigrationOutcome::CanonicalPresent => {
                output::print_success("Settings already at the canonical location");
            }
            MigrationOutcome::NoLegacy => {
                output::print_warning("No legacy settings file found");
            }
            MigrationOutcome::Migrated(settings) => {
                output::print_success(&format!(
                    "Migrated {} to {}",
                    store.locations().legacy.display(),
                    store.locations().canonical.display()
                ));
                output::print_item(&settings, format);
            }
        },
        SettingsCommand::Languages => {
            let rows: Vec<LanguageRow> = Language::ALL
                .iter()
                .map(|lang| LanguageRow {
                    code: lang.code(),
                    name: lang.display_name(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
