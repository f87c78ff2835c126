//! Servlet Runner Entry Point
//!
//! A thin host shim: it selects a servlet, reads one JSON call request from
//! stdin (for `call`), and writes the JSON response to stdout. Real hosts
//! embed servlets through the library crate and supply their own sandbox and
//! transport collaborators.

use std::io::Read;

use anyhow::{Context, Result, bail};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use mcp_servlets::core::Config;
use mcp_servlets::servlets::eval::NoSandbox;
use mcp_servlets::servlets::vault::client::VaultClient;
use mcp_servlets::{CallToolRequest, EvalServlet, Servlet, VaultServlet};

fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    let mut args = std::env::args().skip(1);
    let servlet_name = args.next().unwrap_or_default();
    let operation = args.next().unwrap_or_else(|| "describe".to_string());

    let servlet: Box<dyn Servlet> = match servlet_name.as_str() {
        "eval" => Box::new(EvalServlet::new(Box::new(NoSandbox))),
        "vault" => Box::new(VaultServlet::new(VaultClient::new(&config.vault))),
        other => bail!("unknown servlet '{}' (expected 'eval' or 'vault')", other),
    };

    info!(
        "Starting {} v{} ({} servlet)",
        config.server.name,
        config.server.version,
        servlet.name()
    );

    match operation.as_str() {
        "describe" => {
            let listing = servlet.describe();
            println!("{}", serde_json::to_string(&listing)?);
        }
        "call" => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading call request from stdin")?;
            let request: CallToolRequest =
                serde_json::from_str(&input).context("parsing call request")?;
            let result = servlet.call(request);
            println!("{}", serde_json::to_string(&result)?);
        }
        other => bail!("unknown operation '{}' (expected 'describe' or 'call')", other),
    }

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr so
/// stdout stays clean for the JSON response.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
