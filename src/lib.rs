//! Firecrawl MCP Server
//!
//! This crate exposes a locally running Firecrawl instance as a set of
//! Model Context Protocol (MCP) tools over stdio. Each tool call is
//! translated into an HTTP request against the Firecrawl REST API and the
//! raw JSON response is relayed back to the client unchanged.
//!
//! # Architecture
//!
//! - **core**: configuration, the MCP server handler, and the stdio transport
//! - **firecrawl**: the thin HTTP client for the Firecrawl backend
//! - **domains::tools**: tool definitions and the dispatch registry
//!
//! # Example
//!
//! ```rust,no_run
//! use firecrawl_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env(None);
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod firecrawl;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
pub use firecrawl::FirecrawlClient;
