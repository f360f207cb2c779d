//! Common utilities shared across account tools.
//!
//! This module provides email shape checking, URL construction against the
//! configured API base, and the raw-JSON pass-through used by all three
//! account tools.

use reqwest::{RequestBuilder, Url};
use rmcp::model::CallToolResult;

use super::super::super::ToolError;
use super::super::common::{fetch_body, success_result};

/// Check that a string is plausibly an email address.
///
/// rmcp's schema layer does not enforce string formats, so the account
/// tools reject obviously malformed input before building a request.
/// One `@` with a non-empty local part and a dotted domain, no whitespace.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Validate an email parameter, rejecting with `InvalidArguments`.
pub fn require_email(email: &str) -> Result<(), ToolError> {
    if is_email(email) {
        Ok(())
    } else {
        Err(ToolError::invalid_arguments(format!(
            "'{}' is not a valid email address",
            email
        )))
    }
}

/// Build a URL from the account API base and path segments.
///
/// Segments are appended through the URL type so reserved characters in an
/// email end up percent-encoded instead of spliced into the path verbatim.
pub fn api_url(base: &str, segments: &[&str]) -> Result<Url, ToolError> {
    let mut url = Url::parse(base)
        .map_err(|e| ToolError::internal(format!("invalid account API base '{}': {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ToolError::internal("account API base cannot be a base URL"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send the request and return the upstream JSON re-serialized as text.
///
/// The body is parsed to prove it is JSON (a non-JSON body is a typed
/// shape error), then serialized back without interpreting any fields.
pub async fn passthrough_json(
    request: RequestBuilder,
    endpoint: &'static str,
) -> Result<CallToolResult, ToolError> {
    let body = fetch_body(request).await?;
    let value: serde_json::Value = serde_json::from_str(&body)
        .map_err(|e| ToolError::unexpected_shape(endpoint, e.to_string()))?;
    Ok(success_result(serde_json::to_string(&value)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email_valid() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@sub.example.co.ke"));
    }

    #[test]
    fn test_is_email_invalid() {
        assert!(!is_email("plainstring"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@nodot"));
        assert!(!is_email("a b@example.com"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user@.com"));
    }

    #[test]
    fn test_api_url_joins_segments() {
        let url = api_url("https://example.com", &["api", "activate", "u@x.com"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/activate/u@x.com");
    }

    #[test]
    fn test_api_url_encodes_reserved_characters() {
        let url = api_url("https://example.com", &["api", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/a%20b%2Fc");
    }

    #[test]
    fn test_api_url_tolerates_trailing_slash() {
        let url = api_url("https://example.com/", &["api", "x"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/x");
    }

    #[test]
    fn test_api_url_rejects_invalid_base() {
        assert!(api_url("not a url", &["api"]).is_err());
    }
}
