//! Export command: write a scale to a stylesheet or token file.

use crate::cli::common::{CliError, CliResult};
use crate::cli::scale_args::ScaleArgs;
use crate::config::Config;
use crate::export::{self, ExportFormat};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Write the scale to a file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scale: ScaleArgs,

    /// Output format: css, declarations, or json
    #[arg(short, long, value_name = "FORMAT", default_value = "css")]
    pub format: String,

    /// Output path (defaults to [prefix]_scale_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let format: ExportFormat = self.format.parse()?;
        let scale = self.scale.resolve(&config);
        let state = self.scale.build_state(&scale)?;
        let content = export::render_scale(&state, &scale.viewport, &scale.prefix, format)?;

        let output_path = self.get_output_path(&config, &scale.prefix, format);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| CliError::io(format!("Failed to create output directory: {e}")))?;
        }

        fs::write(&output_path, content)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("✓ Exported {} steps to: {}", state.len(), output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, config: &Config, prefix: &str, format: ExportFormat) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: [prefix]_scale_[date].[ext]
        let date = chrono::Local::now().format("%Y-%m-%d");
        let file_name = format!("{}_scale_{}.{}", prefix, date, format.extension());

        match &config.output.export_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
