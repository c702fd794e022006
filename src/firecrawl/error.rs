//! Firecrawl client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by [`super::FirecrawlClient`].
///
/// Every transport-level failure collapses into one of these two variants;
/// there is no retry or partial-result handling.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be completed: connection failure, timeout, or
    /// an unreadable response body.
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },

    /// The backend answered with a non-success status code.
    #[error("{operation} failed: HTTP status {status}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },
}

impl ClientError {
    /// Wrap a reqwest failure for the given operation.
    pub fn request(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Request {
            operation,
            message: source.to_string(),
        }
    }

    /// Record a non-success response status for the given operation.
    pub fn status(operation: &'static str, status: StatusCode) -> Self {
        Self::Status { operation, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ClientError::status("Scrape", StatusCode::INTERNAL_SERVER_ERROR);
        let msg = err.to_string();
        assert!(msg.starts_with("Scrape failed:"));
        assert!(msg.contains("500"));
    }
}
