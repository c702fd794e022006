//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use rmcp::model::ErrorCode;
use thiserror::Error;

use crate::firecrawl::ClientError;

/// Errors that can occur during tool dispatch and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The argument bag could not be destructured into the tool's params.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The backend call failed.
    #[error(transparent)]
    Backend(#[from] ClientError),

    /// Any other failure while producing the result.
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

/// Map tool errors onto protocol error codes.
///
/// Backend and execution failures both surface as internal errors; the
/// message always carries the underlying cause.
impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) => {
                McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
            }
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            ToolError::Backend(e) => McpError::internal_error(e.to_string(), None),
            ToolError::ExecutionFailed(_) => McpError::internal_error(err.to_string(), None),
        }
    }
}
