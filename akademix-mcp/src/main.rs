//! Akademix MCP Server
//!
//! Line-delimited JSON-RPC over stdin/stdout. Logs go to stderr.
//!
//! Tools:
//! - convert: One-off unit conversion
//! - list_categories / units_for: Browse unit categories
//! - converter: Drive the converter widget session
//! - gpa: Grade point average estimate
//! - help / list_functions: Function documentation

mod config;
mod server;

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use server::{McpError, McpRequest, McpResponse, Server, PARSE_ERROR, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

fn main() {
    init_logging();

    let config = Config::from_env();
    let mut server = match Server::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "failed to start");
            std::process::exit(1);
        }
    };

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Akademix MCP server started");
    debug!(?config, stdin_is_terminal = io::stdin().is_terminal(), "startup settings");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(error = %e, "unparseable request");
                        let response = McpResponse::failure(
                            None,
                            McpError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                        );
                        if let Err(e) = write_response(&response) {
                            error!(error = %e, "error writing response");
                            break;
                        }
                        continue;
                    }
                };

                debug!(method = %request.method, "processing");
                let response = server.handle_request(&request);

                // Notifications (no id) get no response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("server shutting down");
}
