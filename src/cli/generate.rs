//! Generate command: print a scale as CSS custom properties.

use crate::cli::common::{CliError, CliResult};
use crate::cli::scale_args::ScaleArgs;
use crate::config::Config;
use crate::export::{self, ExportFormat};
use clap::Args;
use tracing::info;

/// Print the scale as CSS custom properties
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub scale: ScaleArgs,

    /// Output format: css, declarations, or json
    #[arg(short, long, value_name = "FORMAT", default_value = "css")]
    pub format: String,

    /// Also copy the output to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let output = self.render(&config)?;

        if self.copy {
            copy_to_clipboard(&output)?;
            info!("copied scale to clipboard");
        }

        println!("{}", output.trim_end());
        Ok(())
    }

    /// Builds the scale and renders it in the requested format.
    pub fn render(&self, config: &Config) -> CliResult<String> {
        let format: ExportFormat = self.format.parse()?;
        let scale = self.scale.resolve(config);
        let state = self.scale.build_state(&scale)?;
        Ok(export::render_scale(
            &state,
            &scale.viewport,
            &scale.prefix,
            format,
        )?)
    }
}

/// Places `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> CliResult<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))
}
