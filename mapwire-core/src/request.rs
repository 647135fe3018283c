//! Wire-level request and response value types.
//!
//! [`ApiRequest`] is the input contract of the request executor: a fully
//! resolved set of request parameters. [`CallOutcome`] is what one executed
//! request produces. Neither side interprets status codes; a non-2xx
//! response is still a successful exchange at this layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::method::Method;

// ============================================================================
// Protocol
// ============================================================================

/// The URL scheme used for gateway calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP, local development only.
    Http,
    /// HTTPS.
    #[default]
    Https,
}

impl Protocol {
    /// Parses a scheme string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(CoreError::InvalidConfig(format!(
                "protocol must be http or https, got {other}"
            ))),
        }
    }

    /// Returns the scheme string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Returns the well-known port for the scheme.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Request
// ============================================================================

/// A fully resolved outbound request, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// URL scheme.
    pub protocol: Protocol,
    /// Target hostname.
    pub hostname: String,
    /// Explicit port; the scheme default applies when unset.
    pub port: Option<u16>,
    /// Request path. A leading slash is optional.
    pub path: String,
    /// Header name/value pairs.
    pub headers: BTreeMap<String, String>,
    /// Query-string key/value pairs.
    pub query: BTreeMap<String, String>,
    /// Structured value serialized as the JSON request body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request with the given method, hostname, and path, HTTPS on
    /// the default port, and no headers, query, or body.
    pub fn new(method: Method, hostname: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method,
            protocol: Protocol::Https,
            hostname: hostname.into(),
            port: None,
            path: path.into(),
            headers: BTreeMap::new(),
            query: BTreeMap::new(),
            body: None,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Response metadata: status code and headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lower-cased by most transports.
    pub headers: BTreeMap<String, String>,
}

impl ApiResponse {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Looks up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response body, parsed as JSON when the response content-type says so.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Parsed JSON body.
    Json(Value),
    /// Raw body for non-JSON content types.
    Text(String),
    /// No body.
    Empty,
}

impl Payload {
    /// Returns the parsed JSON value, if this is a JSON payload.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the raw text, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Consumes the payload, returning the JSON value if present.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true when no body was received.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The result of one executed request: response metadata plus body.
///
/// Created fresh per invocation and never retained by the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct CallOutcome {
    /// Response metadata.
    pub response: ApiResponse,
    /// Response body.
    pub body: Payload,
}

impl CallOutcome {
    /// Extracts the remote-provided error message from a failed exchange.
    ///
    /// The gateway reports errors as `{"message": "..."}`; falls back to the
    /// raw body or the status code when that shape is absent.
    pub fn remote_message(&self) -> String {
        match &self.body {
            Payload::Json(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("request failed with status {}", self.response.status)),
            Payload::Text(text) if !text.is_empty() => text.clone(),
            _ => format!("request failed with status {}", self.response.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn protocol_parse_and_ports() {
        assert_eq!(Protocol::parse("http").unwrap().default_port(), 80);
        assert_eq!(Protocol::parse("https").unwrap().default_port(), 443);
        assert!(Protocol::parse("ftp").is_err());
    }

    #[test]
    fn success_covers_2xx_only() {
        let mut response = ApiResponse {
            status: 200,
            headers: BTreeMap::new(),
        };
        assert!(response.is_success());
        response.status = 299;
        assert!(response.is_success());
        response.status = 199;
        assert!(!response.is_success());
        response.status = 300;
        assert!(!response.is_success());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let response = ApiResponse { status: 200, headers };
        assert_eq!(response.header("content-type"), Some("application/json"));
    }

    #[test]
    fn remote_message_prefers_json_message_field() {
        let outcome = CallOutcome {
            response: ApiResponse {
                status: 404,
                headers: BTreeMap::new(),
            },
            body: Payload::Json(json!({"message": "No map found"})),
        };
        assert_eq!(outcome.remote_message(), "No map found");
    }

    #[test]
    fn remote_message_falls_back_to_status() {
        let outcome = CallOutcome {
            response: ApiResponse {
                status: 500,
                headers: BTreeMap::new(),
            },
            body: Payload::Empty,
        };
        assert_eq!(outcome.remote_message(), "request failed with status 500");
    }
}
