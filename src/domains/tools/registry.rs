//! Tool registry - catalog and dispatch for all tools.
//!
//! The catalog is a fixed set of four tools; dispatch is an exhaustive
//! match over [`ToolKind`], so adding a tool without routing it is a
//! compile error.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::firecrawl::FirecrawlClient;

use super::definitions::common::parse_params;
use super::definitions::{
    FirecrawlCrawlStatusTool, FirecrawlCrawlTool, FirecrawlMapTool, FirecrawlScrapeTool,
};
use super::error::ToolError;

/// The fixed set of tools exposed by this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Scrape,
    Crawl,
    CrawlStatus,
    Map,
}

impl ToolKind {
    /// Every tool, in catalog order.
    pub const ALL: [ToolKind; 4] = [Self::Scrape, Self::Crawl, Self::CrawlStatus, Self::Map];

    /// Look up a tool by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            FirecrawlScrapeTool::NAME => Some(Self::Scrape),
            FirecrawlCrawlTool::NAME => Some(Self::Crawl),
            FirecrawlCrawlStatusTool::NAME => Some(Self::CrawlStatus),
            FirecrawlMapTool::NAME => Some(Self::Map),
            _ => None,
        }
    }

    /// The registered name of this tool.
    pub fn name(self) -> &'static str {
        match self {
            Self::Scrape => FirecrawlScrapeTool::NAME,
            Self::Crawl => FirecrawlCrawlTool::NAME,
            Self::CrawlStatus => FirecrawlCrawlStatusTool::NAME,
            Self::Map => FirecrawlMapTool::NAME,
        }
    }
}

/// Tool registry - owns the backend client and routes invocations.
pub struct ToolRegistry {
    client: Arc<FirecrawlClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<FirecrawlClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the catalog; discovery
    /// returns it verbatim and in full.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            FirecrawlScrapeTool::to_tool(),
            FirecrawlCrawlTool::to_tool(),
            FirecrawlCrawlStatusTool::to_tool(),
            FirecrawlMapTool::to_tool(),
        ]
    }

    /// Dispatch an invocation to the matching tool.
    ///
    /// The argument bag is destructured into the tool's typed params
    /// (declared defaults filling missing optional fields) and reshaped
    /// into the backend request. Unknown names fail before any HTTP work.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(kind) = ToolKind::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        debug!(tool = name, "Dispatching tool call");

        match kind {
            ToolKind::Scrape => {
                FirecrawlScrapeTool::execute(&self.client, parse_params(arguments)?).await
            }
            ToolKind::Crawl => {
                FirecrawlCrawlTool::execute(&self.client, parse_params(arguments)?).await
            }
            ToolKind::CrawlStatus => {
                FirecrawlCrawlStatusTool::execute(&self.client, parse_params(arguments)?).await
            }
            ToolKind::Map => {
                FirecrawlMapTool::execute(&self.client, parse_params(arguments)?).await
            }
        }
    }
}
