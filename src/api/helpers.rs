//! Common helper functions for API Gateway proxy handlers.
//!
//! This module provides the response envelope shared by the HTTP-triggered
//! Lambdas and the request-body extraction they both need.

use base64::Engine;
use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::FolioError;

pub const ALLOW_HEADERS: &str = "Content-Type,X-Amz-Date,Authorization,Origin,Accept";
pub const ALLOW_METHODS: &str = "POST,OPTIONS";

// ============================================================================
// Response Builders
// ============================================================================

/// Cross-origin and content-type headers attached to every response.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": ALLOW_HEADERS,
        "Access-Control-Allow-Methods": ALLOW_METHODS,
        "Content-Type": "application/json"
    })
}

/// Wraps a serializable body in the proxy integration envelope.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "null".to_string());
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": body
    })
}

/// Answer to a CORS preflight request.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": ""
    })
}

// ============================================================================
// Request Helpers
// ============================================================================

/// True when the proxy event is an `OPTIONS` request (REST or HTTP API shape).
#[must_use]
pub fn is_preflight(payload: &Value) -> bool {
    payload
        .get("httpMethod")
        .and_then(Value::as_str)
        .or_else(|| {
            payload
                .get("requestContext")
                .and_then(|c| c.get("http"))
                .and_then(|h| h.get("method"))
                .and_then(Value::as_str)
        })
        .is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
}

/// Returns the request body, decoding it when API Gateway base64-encoded it.
///
/// # Errors
///
/// Returns a parse error if the body is missing, null, not a string, or not
/// valid base64/UTF-8 when flagged as encoded.
pub fn extract_body(payload: &Value) -> Result<String, FolioError> {
    let Some(body) = payload.get("body") else {
        return Err(FolioError::ParseError("Missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(FolioError::ParseError("Invalid body format".to_string()));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if encoded {
        let bytes = base64::engine::general_purpose::STANDARD.decode(body_str)?;
        Ok(String::from_utf8(bytes)?)
    } else {
        Ok(body_str.to_string())
    }
}
