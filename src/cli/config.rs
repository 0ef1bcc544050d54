//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult, HostContext};
use clap::{Args, Subcommand};
use scalekeys::config::Config;
use scalekeys::models::Accidentals;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Location of the settings document
    #[arg(long, value_name = "FILE")]
    settings_file: Option<PathBuf>,

    /// Accidental spelling (both, sharps, or flats)
    #[arg(long, value_name = "MODE")]
    accidentals: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    settings_file: String,
    accidentals: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, ctx: &HostContext) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(ctx),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &HostContext) -> CliResult<()> {
        let output = ConfigOutput {
            config_file: Config::config_file_path()
                .ok()
                .map(|p| p.to_string_lossy().to_string()),
            settings_file: ctx.settings_path.to_string_lossy().to_string(),
            accidentals: ctx.accidentals().to_string(),
        };

        if self.json {
            return print_json(&output);
        }

        println!(
            "Config file:   {}",
            output.config_file.as_deref().unwrap_or("(unavailable)")
        );
        println!("Settings file: {}", output.settings_file);
        println!("Accidentals:   {}", output.accidentals);
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.settings_file.is_none() && self.accidentals.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --settings-file or --accidentals",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|err| {
            warn!("Failed to load configuration, unset keys are reset to defaults: {err:#}");
            Config::default()
        });

        if let Some(path) = &self.settings_file {
            config.paths.settings_file = Some(path.clone());
        }

        if let Some(value) = &self.accidentals {
            config.ui.accidentals = Accidentals::parse(value).ok_or_else(|| {
                CliError::validation(
                    "Invalid accidentals mode. Must be 'both', 'sharps', or 'flats'",
                )
            })?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {:#}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}
