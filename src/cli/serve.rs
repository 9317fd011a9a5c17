//! Serve command: run the HTTP API.

use crate::cli::common::{CliError, CliResult};
use clap::Args;
use std::net::SocketAddr;

/// Run the scale API server
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3001")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

impl ServeArgs {
    /// Execute the serve command
    #[cfg(feature = "web")]
    pub fn execute(&self) -> CliResult<()> {
        let config = crate::config::Config::load().unwrap_or_default();
        let addr = self.addr()?;

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        println!("Typescale API listening on http://{addr}");
        runtime
            .block_on(crate::web::run_server(config, addr))
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }

    /// Execute the serve command
    #[cfg(not(feature = "web"))]
    pub fn execute(&self) -> CliResult<()> {
        self.addr()?;
        Err(CliError::validation(
            "this build does not include the HTTP API (enable the `web` feature)",
        ))
    }

    fn addr(&self) -> CliResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid host '{}': {e}", self.host)))
    }
}
