//! HTTP method registry and normalization.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Canonical HTTP method tokens accepted by the gateway, matching the full
/// standard registry (including the WebDAV and publish/subscribe verbs).
const METHODS: &[&str] = &[
    "ACL",
    "BIND",
    "CHECKOUT",
    "CONNECT",
    "COPY",
    "DELETE",
    "GET",
    "HEAD",
    "LINK",
    "LOCK",
    "M-SEARCH",
    "MERGE",
    "MKACTIVITY",
    "MKCALENDAR",
    "MKCOL",
    "MOVE",
    "NOTIFY",
    "OPTIONS",
    "PATCH",
    "POST",
    "PROPFIND",
    "PROPPATCH",
    "PURGE",
    "PUT",
    "REBIND",
    "REPORT",
    "SEARCH",
    "SOURCE",
    "SUBSCRIBE",
    "TRACE",
    "UNBIND",
    "UNLINK",
    "UNLOCK",
    "UNSUBSCRIBE",
];

/// A validated, upper-case HTTP method token.
///
/// Values only exist for tokens in the canonical registry, so holding a
/// `Method` is proof the verb is dispatchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method(&'static str);

impl Method {
    /// The GET method.
    pub const GET: Method = Method("GET");
    /// The HEAD method.
    pub const HEAD: Method = Method("HEAD");
    /// The POST method.
    pub const POST: Method = Method("POST");
    /// The PUT method.
    pub const PUT: Method = Method("PUT");
    /// The PATCH method.
    pub const PATCH: Method = Method("PATCH");
    /// The DELETE method.
    pub const DELETE: Method = Method("DELETE");
    /// The OPTIONS method.
    pub const OPTIONS: Method = Method("OPTIONS");

    /// Parses a verb, normalizing to upper-case.
    ///
    /// Accepts the token if and only if the normalized form is in the
    /// canonical registry; fails with [`CoreError::UnsupportedMethod`]
    /// otherwise.
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        let normalized = token.to_ascii_uppercase();
        METHODS
            .iter()
            .copied()
            .find(|method| *method == normalized)
            .map(Method)
            .ok_or_else(|| CoreError::UnsupportedMethod(token.to_string()))
    }

    /// Returns the canonical upper-case token.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Returns every token in the registry.
    pub fn registry() -> &'static [&'static str] {
        METHODS
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::GET
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Method {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::parse(s)
    }
}
