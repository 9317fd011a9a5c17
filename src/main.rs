//! Typescale - Typographic scale generator
//!
//! Opens the interactive editor when run without a subcommand; every
//! subcommand is headless and scriptable.

use clap::{Parser, Subcommand};
use typescale::cli::{
    ClampArgs, CliError, CliResult, ConfigArgs, ExportArgs, GenerateArgs, ServeArgs, StepsArgs,
};
use typescale::constants::{APP_BINARY_NAME, APP_NAME};
use typescale::logging::{init_logging, LogTarget};

/// Typescale - Generate responsive typographic scales
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scale as CSS or JSON
    Generate(GenerateArgs),
    /// Write the scale to a file
    Export(ExportArgs),
    /// Derive the clamp() expression for a single size
    Clamp(ClampArgs),
    /// Show the size of every step
    Steps(StepsArgs),
    /// Show or change configured defaults
    Config(ConfigArgs),
    /// Run the HTTP API
    Serve(ServeArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Clamp(args) => args.execute(),
            Self::Steps(args) => args.execute(),
            Self::Config(args) => args.execute(),
            Self::Serve(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(command) => {
            if let Err(e) = init_logging(cli.verbose, &LogTarget::Stderr) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
            command.execute()
        }
        None => run_editor(cli.verbose),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}

#[cfg(feature = "ratatui")]
fn run_editor(verbose: bool) -> CliResult<()> {
    use typescale::config::Config;
    use typescale::logging::LOG_FILE_NAME;

    // Log to a file; stderr output would corrupt the terminal UI.
    if let Ok(dir) = Config::config_dir() {
        let _ = std::fs::create_dir_all(&dir);
        let _ = init_logging(verbose, &LogTarget::File(dir.join(LOG_FILE_NAME)));
    }

    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

    typescale::tui::run_tui(config).map_err(|e| CliError::io(format!("{APP_NAME}: {e:#}")))
}

#[cfg(not(feature = "ratatui"))]
fn run_editor(_verbose: bool) -> CliResult<()> {
    use clap::CommandFactory;

    Cli::command()
        .print_help()
        .map_err(|e| CliError::io(e.to_string()))?;
    println!();
    println!("{APP_NAME} was built without the interactive editor.");
    Ok(())
}
