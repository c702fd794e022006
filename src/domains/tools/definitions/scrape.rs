//! `firecrawl_scrape` tool.
//!
//! Scrapes a single page through the backend and relays the response.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domains::tools::ToolError;
use crate::firecrawl::FirecrawlClient;

use super::common::{json_result, require_non_empty};

/// Parameters for a single-page scrape.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeParams {
    #[schemars(description = "The URL to scrape")]
    pub url: String,

    #[serde(default = "default_formats")]
    #[schemars(
        description = "Output formats (markdown, html, rawHtml, screenshot, links, extract)"
    )]
    pub formats: Vec<String>,

    #[serde(default = "default_only_main_content")]
    #[schemars(description = "Extract only main content, removing headers, navs, footers")]
    pub only_main_content: bool,

    #[schemars(description = "HTML tags to include in the output")]
    pub include_tags: Option<Vec<String>>,

    #[schemars(description = "HTML tags to exclude from the output")]
    pub exclude_tags: Option<Vec<String>>,
}

fn default_formats() -> Vec<String> {
    vec!["markdown".to_string()]
}

fn default_only_main_content() -> bool {
    true
}

/// Single-page scrape tool.
#[derive(Debug, Clone)]
pub struct FirecrawlScrapeTool;

impl FirecrawlScrapeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "firecrawl_scrape";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Scrape a single webpage and return its content in markdown format";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ScrapeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Build the options object forwarded to the scrape endpoint.
    ///
    /// `includeTags`/`excludeTags` are omitted entirely when not supplied.
    pub fn scrape_options(params: &ScrapeParams) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert("formats".to_string(), json!(params.formats));
        options.insert(
            "onlyMainContent".to_string(),
            Value::Bool(params.only_main_content),
        );
        if let Some(tags) = &params.include_tags {
            options.insert("includeTags".to_string(), json!(tags));
        }
        if let Some(tags) = &params.exclude_tags {
            options.insert("excludeTags".to_string(), json!(tags));
        }
        options
    }

    /// Execute the tool against the backend.
    pub async fn execute(
        client: &FirecrawlClient,
        params: ScrapeParams,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty("url", &params.url)?;
        debug!(url = %params.url, "Scraping page");

        let result = client
            .scrape(&params.url, Self::scrape_options(&params))
            .await?;
        json_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let json = r#"{"url": "https://example.com"}"#;
        let params: ScrapeParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.formats, vec!["markdown".to_string()]);
        assert!(params.only_main_content);
        assert!(params.include_tags.is_none());
        assert!(params.exclude_tags.is_none());
    }

    #[test]
    fn test_params_custom() {
        let json = r#"{
            "url": "https://example.com",
            "formats": ["html", "links"],
            "onlyMainContent": false,
            "includeTags": ["article"],
            "excludeTags": ["nav", "footer"]
        }"#;
        let params: ScrapeParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.formats, vec!["html".to_string(), "links".to_string()]);
        assert!(!params.only_main_content);
        assert_eq!(params.include_tags.as_deref(), Some(&["article".to_string()][..]));
        assert_eq!(
            params.exclude_tags.as_deref(),
            Some(&["nav".to_string(), "footer".to_string()][..])
        );
    }

    #[test]
    fn test_default_options_omit_tag_filters() {
        let params: ScrapeParams =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        let options = FirecrawlScrapeTool::scrape_options(&params);

        assert_eq!(options.get("formats"), Some(&serde_json::json!(["markdown"])));
        assert_eq!(options.get("onlyMainContent"), Some(&Value::Bool(true)));
        assert!(!options.contains_key("includeTags"));
        assert!(!options.contains_key("excludeTags"));
    }

    #[test]
    fn test_schema_requires_url_and_declares_defaults() {
        let tool = FirecrawlScrapeTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();

        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "url"));

        let properties = &schema["properties"];
        assert_eq!(properties["formats"]["default"], serde_json::json!(["markdown"]));
        assert_eq!(properties["onlyMainContent"]["default"], serde_json::json!(true));
        assert!(properties.get("includeTags").is_some());
        assert!(properties.get("excludeTags").is_some());
    }
}
