//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::cli::scale_args::ViewportArgs;
use crate::config::{Config, ThemeMode};
use crate::models::curve::{CurveType, ScaleMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

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
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default base size, in rem
    #[arg(long, value_name = "REM", allow_negative_numbers = true)]
    base_size: Option<f64>,

    /// Default number of steps (5-14)
    #[arg(long, value_name = "N")]
    steps: Option<usize>,

    /// Default generation mode (curve or proportional)
    #[arg(long, value_name = "MODE")]
    mode: Option<ScaleMode>,

    /// Default curve type
    #[arg(long, value_name = "CURVE")]
    curve: Option<CurveType>,

    /// Default curve intensity
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    intensity: Option<f64>,

    /// Default custom-property prefix
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Directory `export` writes to by default
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Size change per arrow key press in the editor
    #[arg(long, value_name = "REM")]
    nudge: Option<f64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&ConfigOutput::from(&config)).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            print!("{}", format_human_readable(&config));
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.base_size.is_none()
            && self.steps.is_none()
            && self.mode.is_none()
            && self.curve.is_none()
            && self.intensity.is_none()
            && self.prefix.is_none()
            && self.viewport.min_viewport.is_none()
            && self.viewport.max_viewport.is_none()
            && self.viewport.divisor.is_none()
            && self.viewport.growth.is_none()
            && self.export_dir.is_none()
            && self.theme.is_none()
            && self.nudge.is_none()
    }

    /// Applies the given flags to `config` and validates the result.
    pub fn apply_to(&self, config: &mut Config) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified (see `config set --help`)",
            ));
        }

        if let Some(base_size) = self.base_size {
            config.scale.base_size = base_size;
        }
        if let Some(steps) = self.steps {
            config.scale.num_steps = steps;
        }
        if let Some(mode) = self.mode {
            config.scale.mode = mode;
        }
        if let Some(curve) = self.curve {
            config.scale.curve = curve;
        }
        if let Some(intensity) = self.intensity {
            config.scale.intensity = intensity;
        }
        if let Some(prefix) = &self.prefix {
            config.output.prefix.clone_from(prefix);
        }
        config.viewport = self.viewport.resolve(config.viewport);

        if let Some(path) = &self.export_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create export directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.output.export_dir = Some(path.clone());
        }

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = match theme_str.to_lowercase().as_str() {
                "auto" => ThemeMode::Auto,
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => {
                    return Err(CliError::validation(
                        "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
                    ))
                }
            };
        }

        if let Some(nudge) = self.nudge {
            config.ui.nudge = nudge;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load().unwrap_or_default();
        self.apply_to(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    config_file: Option<String>,
    scale: &'a crate::config::ScaleDefaults,
    viewport: &'a crate::models::viewport::ViewportParams,
    output: OutputOutput<'a>,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct OutputOutput<'a> {
    prefix: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    export_dir: Option<String>,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    nudge: f64,
}

impl<'a> From<&'a Config> for ConfigOutput<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            config_file: Config::config_file_path()
                .ok()
                .map(|p| p.to_string_lossy().to_string()),
            scale: &config.scale,
            viewport: &config.viewport,
            output: OutputOutput {
                prefix: &config.output.prefix,
                export_dir: config
                    .output
                    .export_dir
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            ui: UiOutput {
                theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
                nudge: config.ui.nudge,
            },
        }
    }
}

/// Human-readable configuration listing
fn format_human_readable(config: &Config) -> String {
    let config_file = Config::config_file_path()
        .map_or_else(|_| "(unknown)".to_string(), |p| p.display().to_string());
    let export_dir = config
        .output
        .export_dir
        .as_ref()
        .map_or_else(|| "(current directory)".to_string(), |p| p.display().to_string());

    let mut out = format!("Configuration file: {config_file}\n\n");
    out.push_str("Scale:\n");
    out.push_str(&format!("  Base size:    {}\n", config.scale.base_size));
    out.push_str(&format!("  Steps:        {}\n", config.scale.num_steps));
    out.push_str(&format!("  Mode:         {}\n", config.scale.mode));
    out.push_str(&format!("  Curve:        {}\n", config.scale.curve));
    out.push_str(&format!("  Intensity:    {}\n", config.scale.intensity));
    out.push_str("\nViewport:\n");
    out.push_str(&format!("  Min:          {}px\n", config.viewport.min_viewport));
    out.push_str(&format!("  Max:          {}px\n", config.viewport.max_viewport));
    out.push_str(&format!("  Divisor:      {}px\n", config.viewport.divisor));
    out.push_str(&format!("  Growth:       {}\n", config.viewport.growth));
    out.push_str("\nOutput:\n");
    out.push_str(&format!("  Prefix:       {}\n", config.output.prefix));
    out.push_str(&format!("  Export dir:   {export_dir}\n"));
    out.push_str("\nUI:\n");
    out.push_str(&format!("  Theme:        {:?}\n", config.ui.theme_mode));
    out.push_str(&format!("  Nudge:        {}\n", config.ui.nudge));
    out
}
