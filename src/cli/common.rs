//! Shared plumbing for CLI commands: error type, exit codes, host context.

use scalekeys::config::Config;
use scalekeys::models::Accidentals;
use scalekeys::{ScaleEngine, ScaleError};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input: unknown note, unknown scale, invalid option
    ValidationError = 1,
    /// File system failure
    IoError = 2,
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ScaleError> for CliError {
    fn from(err: ScaleError) -> Self {
        match err {
            ScaleError::InvalidRoot(_) | ScaleError::UnknownScale(_) => {
                Self::validation(err.to_string())
            }
            ScaleError::PersistenceUnavailable { .. } => Self::io(err.to_string()),
        }
    }
}

/// Result type for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Everything a command needs from the host environment.
#[derive(Debug, Clone)]
pub struct HostContext {
    /// Host configuration (defaults if the file is missing or unreadable)
    pub config: Config,
    /// Resolved location of the settings document
    pub settings_path: PathBuf,
}

impl HostContext {
    /// Loads the host config and resolves the settings path.
    ///
    /// `settings_override` (the `--settings` flag) wins over the config file.
    pub fn resolve(settings_override: Option<&Path>) -> CliResult<Self> {
        let config = Config::load().unwrap_or_else(|err| {
            warn!("Failed to load configuration, using defaults: {err:#}");
            Config::default()
        });

        let settings_path = match settings_override {
            Some(path) => path.to_path_buf(),
            None => config.settings_path().map_err(|e| {
                CliError::io(format!("Failed to resolve settings path: {e:#}"))
            })?,
        };
        debug!(path = %settings_path.display(), "Resolved settings path");

        Ok(Self {
            config,
            settings_path,
        })
    }

    /// Starts the engine on the resolved settings document.
    pub fn engine(&self) -> ScaleEngine {
        ScaleEngine::initialize(&self.settings_path)
    }

    /// Accidental spelling preference.
    pub const fn accidentals(&self) -> Accidentals {
        self.config.ui.accidentals
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}
