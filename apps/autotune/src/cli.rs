//! # CLI Module
//!
//! Command definitions and file-backed operations over a settings document.
//!
//! Every command is a plain function so the integration tests can drive it
//! without spawning the binary.

use autotune_core::formats::{FormatError, SettingsFormat, to_json};
use autotune_core::RecommendationSettings;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default settings document path.
pub const DEFAULT_SETTINGS_PATH: &str = "recommendation_settings.json";

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl CliError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Manage Autotune recommendation settings.
#[derive(Debug, Parser)]
#[command(name = "autotune", version, about)]
pub struct Cli {
    /// Settings document to operate on.
    #[arg(short, long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    pub file: PathBuf,

    /// Document encoding: json or binary.
    #[arg(long, global = true, default_value = "json")]
    pub format: String,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a settings document with no threshold.
    Init {
        /// Overwrite an existing document.
        #[arg(long)]
        force: bool,
    },
    /// Print the settings rendering.
    Show {
        /// Print the JSON document instead.
        #[arg(long)]
        json: bool,
    },
    /// Print the bare threshold value.
    Get,
    /// Set the threshold. Any text is accepted.
    Set {
        /// New threshold value, stored verbatim.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Remove the threshold.
    Clear,
    /// Re-encode the document into another file.
    Convert {
        /// Destination path.
        output: PathBuf,
        /// Destination encoding: json or binary.
        #[arg(long, default_value = "binary")]
        to: String,
    },
}

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let path = cli.file.as_path();
    let format = cli.format.as_str();
    match &cli.command {
        Commands::Init { force } => cmd_init(path, format, *force),
        Commands::Show { json } => cmd_show(path, format, *json),
        Commands::Get => cmd_get(path, format),
        Commands::Set { value } => cmd_set(path, format, value),
        Commands::Clear => cmd_clear(path, format),
        Commands::Convert { output, to } => cmd_convert(path, format, output, to),
    }
}

// =============================================================================
// LOAD / SAVE
// =============================================================================

/// Load the document at `path`, or default settings if it does not exist.
pub fn load_or_default(path: &Path, format: &str) -> Result<RecommendationSettings, CliError> {
    format.parse::<SettingsFormat>()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No settings document, using defaults");
        return Ok(RecommendationSettings::default());
    }

    load_settings(path, format)
}

/// Load the document at `path`. A missing file is an error.
pub fn load_settings(path: &Path, format: &str) -> Result<RecommendationSettings, CliError> {
    let format: SettingsFormat = format.parse()?;
    let bytes = std::fs::read(path).map_err(|e| CliError::io(path, e))?;
    let settings = format.decode(&bytes)?;
    tracing::debug!(path = %path.display(), %format, %settings, "Loaded settings");
    Ok(settings)
}

/// Encode and write `settings` to `path`.
pub fn save_settings(
    settings: &RecommendationSettings,
    path: &Path,
    format: &str,
) -> Result<(), CliError> {
    let format: SettingsFormat = format.parse()?;
    let bytes = format.encode(settings)?;
    std::fs::write(path, bytes).map_err(|e| CliError::io(path, e))?;
    tracing::debug!(path = %path.display(), %format, %settings, "Saved settings");
    Ok(())
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Text printed by `show`: the rendering, or the JSON document.
pub fn show_output(path: &Path, format: &str, json: bool) -> Result<String, CliError> {
    let settings = load_or_default(path, format)?;
    if json {
        Ok(to_json(&settings)?)
    } else {
        Ok(settings.to_string())
    }
}

/// Text printed by `get`: the bare threshold, or `null` when absent.
pub fn get_output(path: &Path, format: &str) -> Result<String, CliError> {
    let settings = load_or_default(path, format)?;
    Ok(settings.threshold().unwrap_or("null").to_string())
}

pub fn cmd_init(path: &Path, format: &str, force: bool) -> Result<(), CliError> {
    let settings = RecommendationSettings::new();
    if force {
        save_settings(&settings, path, format)?;
    } else {
        let bytes = format.parse::<SettingsFormat>()?.encode(&settings)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => CliError::AlreadyExists {
                    path: path.to_path_buf(),
                },
                _ => CliError::io(path, e),
            })?;
        file.write_all(&bytes).map_err(|e| CliError::io(path, e))?;
    }

    tracing::info!(path = %path.display(), "Initialized settings document");
    Ok(())
}

pub fn cmd_show(path: &Path, format: &str, json: bool) -> Result<(), CliError> {
    println!("{}", show_output(path, format, json)?);
    Ok(())
}

pub fn cmd_get(path: &Path, format: &str) -> Result<(), CliError> {
    println!("{}", get_output(path, format)?);
    Ok(())
}

pub fn cmd_set(path: &Path, format: &str, value: &str) -> Result<(), CliError> {
    let mut settings = load_or_default(path, format)?;
    settings.set_threshold(value);
    save_settings(&settings, path, format)?;
    tracing::info!(%settings, "Threshold updated");
    Ok(())
}

pub fn cmd_clear(path: &Path, format: &str) -> Result<(), CliError> {
    let mut settings = load_or_default(path, format)?;
    settings.clear_threshold();
    save_settings(&settings, path, format)?;
    tracing::info!(%settings, "Threshold cleared");
    Ok(())
}

pub fn cmd_convert(
    path: &Path,
    format: &str,
    output: &Path,
    output_format: &str,
) -> Result<(), CliError> {
    let settings = load_settings(path, format)?;
    save_settings(&settings, output, output_format)?;
    tracing::info!(
        from = %path.display(),
        to = %output.display(),
        output_format,
        "Converted settings document"
    );
    Ok(())
}
