//! `firecrawl_map` tool.
//!
//! Lists the URLs reachable from a site via the backend's map endpoint.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domains::tools::ToolError;
use crate::firecrawl::FirecrawlClient;

use super::common::{json_result, require_non_empty};

/// Parameters for mapping a site.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapParams {
    #[schemars(description = "The URL to map")]
    pub url: String,

    #[schemars(description = "Search query to filter URLs")]
    pub search: Option<String>,

    #[serde(default)]
    #[schemars(description = "Ignore the website's sitemap")]
    pub ignore_sitemap: bool,

    #[serde(default)]
    #[schemars(description = "Include subdomains in the map")]
    pub include_subdomains: bool,

    #[serde(default = "default_limit")]
    #[schemars(description = "Maximum number of URLs to return")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    5000
}

/// Site map tool.
#[derive(Debug, Clone)]
pub struct FirecrawlMapTool;

impl FirecrawlMapTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "firecrawl_map";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Map a website to get a list of all accessible URLs";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MapParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Build the options object forwarded to the map endpoint.
    ///
    /// `search` is omitted entirely when not supplied.
    pub fn map_options(params: &MapParams) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert(
            "ignoreSitemap".to_string(),
            Value::Bool(params.ignore_sitemap),
        );
        options.insert(
            "includeSubdomains".to_string(),
            Value::Bool(params.include_subdomains),
        );
        options.insert("limit".to_string(), json!(params.limit));
        if let Some(search) = &params.search {
            options.insert("search".to_string(), Value::String(search.clone()));
        }
        options
    }

    /// Execute the tool against the backend.
    pub async fn execute(
        client: &FirecrawlClient,
        params: MapParams,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty("url", &params.url)?;
        debug!(url = %params.url, "Mapping site");

        let result = client
            .map(&params.url, Self::map_options(&params))
            .await?;
        json_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params: MapParams =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(params.search.is_none());
        assert!(!params.ignore_sitemap);
        assert!(!params.include_subdomains);
        assert_eq!(params.limit, 5000);
    }

    #[test]
    fn test_default_options_omit_search() {
        let params: MapParams =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        let options = FirecrawlMapTool::map_options(&params);

        assert_eq!(
            Value::Object(options),
            serde_json::json!({
                "ignoreSitemap": false,
                "includeSubdomains": false,
                "limit": 5000
            })
        );
    }

    #[test]
    fn test_search_is_forwarded_when_supplied() {
        let params: MapParams = serde_json::from_str(
            r#"{"url": "https://example.com", "search": "docs", "limit": 50}"#,
        )
        .unwrap();
        let options = FirecrawlMapTool::map_options(&params);

        assert_eq!(options.get("search"), Some(&serde_json::json!("docs")));
        assert_eq!(options.get("limit"), Some(&serde_json::json!(50)));
    }

    #[test]
    fn test_schema_requires_url_and_declares_defaults() {
        let tool = FirecrawlMapTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();

        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "url"));

        let properties = &schema["properties"];
        assert_eq!(properties["ignoreSitemap"]["default"], serde_json::json!(false));
        assert_eq!(
            properties["includeSubdomains"]["default"],
            serde_json::json!(false)
        );
        assert_eq!(properties["limit"]["default"], serde_json::json!(5000));
    }
}
