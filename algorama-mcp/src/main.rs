//! Algorama MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio. Tools:
//! - list_functions: List catalog functions, filtered by category and name
//! - describe: Metadata for one function
//! - list_categories: Categories with member counts
//! - evaluate: amplitude * f(frequency * x)
//! - derivative: Centered finite-difference derivative
//! - sample: Evenly spaced curve samples for plotting
//! - export_names: All names in ID order
//!
//! stdout carries only protocol traffic; logs go to stderr.

mod config;
mod protocol;
mod tools;

use config::ServerConfig;
use protocol::{process_line, PROTOCOL_VERSION, SERVER_VERSION};
use std::io::{self, BufRead, Write};
use tools::FunctionServer;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();

    let config = ServerConfig::from_env();
    let server = FunctionServer::standard(config);

    tracing::info!(
        version = SERVER_VERSION,
        protocol = PROTOCOL_VERSION,
        functions = server.catalog().len(),
        x_min = config.sweep.x_min(),
        x_max = config.sweep.x_max(),
        samples = config.sweep.samples(),
        derivative_step = config.derivative_step,
        "Algorama MCP server ready"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = process_line(&server, &line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response).and_then(|_| stdout.flush()) {
                    tracing::error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error reading input");
                break;
            }
        }
    }

    tracing::info!("server shutting down");
}
