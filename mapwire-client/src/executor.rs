//! Request execution.
//!
//! [`RequestExecutor`] is the seam between request resolution and the
//! network: the cursor and the CRUD helpers hand it a fully resolved
//! [`ApiRequest`] and get back one [`CallOutcome`]. [`HttpExecutor`] is the
//! reqwest-backed implementation; tests substitute their own.
//!
//! The executor never interprets status codes. A non-2xx response is a
//! successful exchange here; deciding what it means is the caller's job.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use mapwire_core::{ApiRequest, ApiResponse, CallOutcome, CoreError, Payload};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument};
use url::Url;

use crate::error::ClientError;

/// Executes one resolved request against the network.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Performs the HTTP round-trip for `request`.
    ///
    /// Serializes the body as JSON when present, builds the URL from the
    /// request parts, and parses the response body as JSON when the response
    /// content-type matches `application/json`. Network-level failures are
    /// errors; non-2xx statuses are not.
    async fn execute(&self, request: ApiRequest) -> Result<CallOutcome, ClientError>;
}

// ============================================================================
// HTTP Executor
// ============================================================================

/// reqwest-backed request executor.
pub struct HttpExecutor {
    inner: reqwest::Client,
}

impl HttpExecutor {
    /// Creates an executor with the given timeout and TLS strictness.
    pub fn new(timeout: Duration, allow_unauthorized: bool) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mapwire/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(allow_unauthorized)
            .build()?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    #[instrument(
        skip(self, request),
        fields(method = %request.method, hostname = %request.hostname, path = %request.path)
    )]
    async fn execute(&self, request: ApiRequest) -> Result<CallOutcome, ClientError> {
        let url = build_url(&request)?;
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|_| CoreError::UnsupportedMethod(request.method.as_str().to_string()))?;

        let mut headers = header_map(&request.headers)?;
        let mut builder = self.inner.request(method, url);

        if let Some(body) = &request.body {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            builder = builder.body(serde_json::to_vec(body)?);
        }

        debug!("dispatching request");
        let response = builder.headers(headers).send().await?;

        let status = response.status().as_u16();
        let mut response_headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                response_headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        let parts = ApiResponse {
            status,
            headers: response_headers,
        };

        let text = response.text().await?;
        let body = if text.is_empty() {
            Payload::Empty
        } else if is_json(&parts) {
            Payload::Json(serde_json::from_str(&text)?)
        } else {
            Payload::Text(text)
        };

        debug!(status, "response received");
        Ok(CallOutcome {
            response: parts,
            body,
        })
    }
}

fn is_json(response: &ApiResponse) -> bool {
    response
        .header("content-type")
        .is_some_and(|content_type| content_type.contains("application/json"))
}

fn build_url(request: &ApiRequest) -> Result<Url, ClientError> {
    let base = format!("{}://{}", request.protocol, request.hostname);
    let mut url = Url::parse(&base).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

    if let Some(port) = request.port {
        url.set_port(Some(port))
            .map_err(|()| ClientError::InvalidUrl(format!("cannot set port on {base}")))?;
    }

    url.set_path(&request.path);

    if !request.query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &request.query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| CoreError::InvalidArgument(format!("invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| CoreError::InvalidArgument(format!("invalid header value for {name}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
