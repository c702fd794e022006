//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server:
//! configuration, the MCP server handler, and the transport layer.

pub mod config;
pub mod server;
pub mod transport;

pub use config::{Config, FirecrawlConfig};
pub use server::McpServer;
