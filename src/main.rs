//! MCP Server Entry Point
//!
//! Parses command-line options, resolves the Firecrawl base URL, initializes
//! logging, and starts the server on the stdio transport.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use firecrawl_mcp_server::core::{Config, McpServer, transport::StdioTransport};

/// Command-line options.
///
/// The base URL can also come from the environment; the flag wins when both
/// are present.
#[derive(Debug, Parser)]
#[command(
    name = "firecrawl-mcp-server",
    version,
    about = "MCP server that exposes a local Firecrawl instance as web-scraping tools",
    after_help = "Environment Variables:
  FIRECRAWL_URL           Firecrawl instance URL
  FIRECRAWL_BASE_URL      Alternative environment variable for Firecrawl URL

Examples:
  firecrawl-mcp-server --url http://192.168.1.210:3002
  FIRECRAWL_URL=http://my-server:3002 firecrawl-mcp-server"
)]
struct Cli {
    /// Firecrawl instance URL (default: http://localhost:3002)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; the --url flag takes priority over the environment
    let config = Config::from_env(cli.url);

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "Forwarding requests to Firecrawl instance at {}",
        config.firecrawl.base_url
    );

    let server = McpServer::new(config);

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP protocol stream.
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
