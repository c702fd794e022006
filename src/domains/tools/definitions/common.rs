//! Common utilities shared across tool definitions.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domains::tools::ToolError;

/// Destructure the raw argument bag into a tool's typed params.
///
/// Missing optional fields pick up their declared defaults; unrecognized
/// extra fields are ignored.
pub fn parse_params<T: DeserializeOwned>(arguments: Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap a backend response as a single text content block containing the
/// pretty-printed (2-space indent) JSON.
pub fn json_result(value: &Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Reject empty required string fields before any backend call is made.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "'{field}' must be a non-empty string"
        )));
    }
    Ok(())
}
