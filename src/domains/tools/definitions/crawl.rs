//! `firecrawl_crawl` tool.
//!
//! Starts a multi-page crawl job on the backend. The crawl-specific fields
//! are nested under a `crawlerOptions` object before forwarding; the
//! backend expects exactly that shape.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domains::tools::ToolError;
use crate::firecrawl::FirecrawlClient;

use super::common::{json_result, require_non_empty};

/// Parameters for starting a crawl.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrawlParams {
    #[schemars(description = "The starting URL to crawl")]
    pub url: String,

    #[schemars(description = "URL patterns to include (supports wildcards)")]
    pub includes: Option<Vec<String>>,

    #[schemars(description = "URL patterns to exclude (supports wildcards)")]
    pub excludes: Option<Vec<String>>,

    #[serde(default = "default_max_depth")]
    #[schemars(description = "Maximum crawl depth")]
    pub max_depth: u32,

    #[serde(default = "default_limit")]
    #[schemars(description = "Maximum number of pages to crawl")]
    pub limit: u32,

    #[serde(default)]
    #[schemars(description = "Allow crawling backward links")]
    pub allow_backward_links: bool,

    #[serde(default)]
    #[schemars(description = "Allow crawling external links")]
    pub allow_external_links: bool,
}

fn default_max_depth() -> u32 {
    2
}

fn default_limit() -> u32 {
    10
}

/// Multi-page crawl tool.
#[derive(Debug, Clone)]
pub struct FirecrawlCrawlTool;

impl FirecrawlCrawlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "firecrawl_crawl";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Crawl a website starting from a URL and return content from multiple pages";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CrawlParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Build the `crawlerOptions` object forwarded to the crawl endpoint.
    ///
    /// `includes`/`excludes` are omitted entirely when not supplied.
    pub fn crawler_options(params: &CrawlParams) -> Map<String, Value> {
        let mut crawler = Map::new();
        crawler.insert("maxDepth".to_string(), json!(params.max_depth));
        crawler.insert("limit".to_string(), json!(params.limit));
        crawler.insert(
            "allowBackwardLinks".to_string(),
            Value::Bool(params.allow_backward_links),
        );
        crawler.insert(
            "allowExternalLinks".to_string(),
            Value::Bool(params.allow_external_links),
        );
        if let Some(includes) = &params.includes {
            crawler.insert("includes".to_string(), json!(includes));
        }
        if let Some(excludes) = &params.excludes {
            crawler.insert("excludes".to_string(), json!(excludes));
        }
        crawler
    }

    /// Execute the tool against the backend.
    pub async fn execute(
        client: &FirecrawlClient,
        params: CrawlParams,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty("url", &params.url)?;
        debug!(url = %params.url, "Starting crawl");

        let mut options = Map::new();
        options.insert(
            "crawlerOptions".to_string(),
            Value::Object(Self::crawler_options(&params)),
        );

        let result = client.crawl(&params.url, options).await?;
        json_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let json = r#"{"url": "https://example.com"}"#;
        let params: CrawlParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.max_depth, 2);
        assert_eq!(params.limit, 10);
        assert!(!params.allow_backward_links);
        assert!(!params.allow_external_links);
        assert!(params.includes.is_none());
        assert!(params.excludes.is_none());
    }

    #[test]
    fn test_default_crawler_options_shape() {
        let params: CrawlParams =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        let crawler = FirecrawlCrawlTool::crawler_options(&params);

        assert_eq!(
            Value::Object(crawler),
            serde_json::json!({
                "maxDepth": 2,
                "limit": 10,
                "allowBackwardLinks": false,
                "allowExternalLinks": false
            })
        );
    }

    #[test]
    fn test_patterns_are_forwarded_when_supplied() {
        let json = r#"{
            "url": "https://example.com",
            "includes": ["/docs/*"],
            "excludes": ["/blog/*"],
            "maxDepth": 5,
            "limit": 100,
            "allowBackwardLinks": true,
            "allowExternalLinks": true
        }"#;
        let params: CrawlParams = serde_json::from_str(json).unwrap();
        let crawler = FirecrawlCrawlTool::crawler_options(&params);

        assert_eq!(crawler.get("maxDepth"), Some(&serde_json::json!(5)));
        assert_eq!(crawler.get("limit"), Some(&serde_json::json!(100)));
        assert_eq!(crawler.get("allowBackwardLinks"), Some(&Value::Bool(true)));
        assert_eq!(crawler.get("allowExternalLinks"), Some(&Value::Bool(true)));
        assert_eq!(crawler.get("includes"), Some(&serde_json::json!(["/docs/*"])));
        assert_eq!(crawler.get("excludes"), Some(&serde_json::json!(["/blog/*"])));
    }

    #[test]
    fn test_schema_requires_url_and_declares_defaults() {
        let tool = FirecrawlCrawlTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();

        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "url"));

        let properties = &schema["properties"];
        assert_eq!(properties["maxDepth"]["default"], serde_json::json!(2));
        assert_eq!(properties["limit"]["default"], serde_json::json!(10));
        assert_eq!(
            properties["allowBackwardLinks"]["default"],
            serde_json::json!(false)
        );
        assert_eq!(
            properties["allowExternalLinks"]["default"],
            serde_json::json!(false)
        );
    }
}
