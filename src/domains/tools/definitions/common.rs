//! Common utilities shared across tool definitions.
//!
//! This module provides shared functionality for building tool results and
//! for issuing the single outbound HTTP call each webhook-backed tool makes.

use reqwest::RequestBuilder;
use rmcp::model::{CallToolResult, Content};

use super::super::ToolError;

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Send a request and return the response body on success.
///
/// A transport failure or a non-2xx status becomes `ToolError::Upstream`;
/// no retries are attempted.
pub async fn fetch_body(request: RequestBuilder) -> Result<String, ToolError> {
    let response = request.send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Extract the text payload from a tool result (test helper).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result_is_text() {
        let result = success_result("hello");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "hello");
    }
}
