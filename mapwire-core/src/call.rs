//! Invocation argument types for data-call cursors.
//!
//! A cursor invocation accepts an optional record identifier and an optional
//! set of per-call options. The accepted shapes are spelled out as the
//! [`CallArgs`] variants so callers state what they are passing instead of
//! relying on positional overloads.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

// ============================================================================
// Identifier
// ============================================================================

/// A record identifier appended to the call path.
///
/// Identifiers are primitives only. A structured value cannot be used as an
/// identifier; pass it through [`CallOptions`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// A string identifier.
    Text(String),
    /// A numeric identifier.
    Number(i64),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

// ============================================================================
// Call Options
// ============================================================================

/// Per-call options: extra headers, query parameters, and a JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Header name/value pairs merged into the outbound request.
    pub headers: BTreeMap<String, String>,
    /// Query-string key/value pairs.
    pub query: BTreeMap<String, String>,
    /// Structured value serialized as the JSON request body.
    pub body: Option<Value>,
}

impl CallOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Sets the JSON request body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

// ============================================================================
// Call Args
// ============================================================================

/// The accepted invocation shapes for a cursor call.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CallArgs {
    /// No identifier, no options.
    #[default]
    None,
    /// Options only.
    Options(CallOptions),
    /// A record identifier only.
    Identifier(Identifier),
    /// A record identifier plus options.
    IdentifierAndOptions(Identifier, CallOptions),
}

impl CallArgs {
    /// Shape with a record identifier only.
    pub fn identifier(id: impl Into<Identifier>) -> Self {
        Self::Identifier(id.into())
    }

    /// Shape with options only.
    pub fn options(options: CallOptions) -> Self {
        Self::Options(options)
    }

    /// Shape with both a record identifier and options.
    pub fn identifier_with_options(id: impl Into<Identifier>, options: CallOptions) -> Self {
        Self::IdentifierAndOptions(id.into(), options)
    }

    /// Resolves the shape into its parts, defaulting options to empty.
    pub fn into_parts(self) -> (Option<Identifier>, CallOptions) {
        match self {
            Self::None => (None, CallOptions::default()),
            Self::Options(options) => (None, options),
            Self::Identifier(id) => (Some(id), CallOptions::default()),
            Self::IdentifierAndOptions(id, options) => (Some(id), options),
        }
    }
}
