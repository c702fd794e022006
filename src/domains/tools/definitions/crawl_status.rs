//! `firecrawl_crawl_status` tool.
//!
//! Checks the state of a previously started crawl job.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::domains::tools::ToolError;
use crate::firecrawl::FirecrawlClient;

use super::common::{json_result, require_non_empty};

/// Parameters for a crawl status check.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrawlStatusParams {
    #[schemars(description = "The job ID returned from a crawl request")]
    pub job_id: String,
}

/// Crawl job status tool.
#[derive(Debug, Clone)]
pub struct FirecrawlCrawlStatusTool;

impl FirecrawlCrawlStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "firecrawl_crawl_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check the status of a crawl job";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CrawlStatusParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Execute the tool against the backend.
    pub async fn execute(
        client: &FirecrawlClient,
        params: CrawlStatusParams,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty("jobId", &params.job_id)?;
        debug!(job_id = %params.job_id, "Checking crawl status");

        let result = client.crawl_status(&params.job_id).await?;
        json_result(&result)
    }
}
