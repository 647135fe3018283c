//! The data-call cursor.
//!
//! A cursor accumulates an endpoint name and an HTTP verb through chainable
//! configuration calls, then resolves the accumulated state plus per-call
//! arguments into exactly one executor dispatch. Configuration calls may
//! arrive in any order, any number of times; the last value wins. The verb
//! defaults to GET; the endpoint must be set before a call is valid.

use std::sync::Arc;

use mapwire_core::{ApiRequest, CallArgs, CallOptions, CallOutcome, CoreError, Identifier, Method};
use tracing::debug;

use crate::api::ApiIdentity;
use crate::error::ClientError;
use crate::executor::RequestExecutor;

/// Header the cursor always owns, regardless of caller-supplied options.
const AUTHORIZATION: &str = "Authorization";

/// A chainable request-builder bound to one API identity.
///
/// The cursor exclusively owns its endpoint and verb; the identity is a
/// shared read-only reference. Invocation captures both synchronously, so
/// reconfiguring a cursor never affects a call already in flight.
pub struct Cursor {
    identity: Arc<ApiIdentity>,
    executor: Arc<dyn RequestExecutor>,
    endpoint: Option<String>,
    verb: Method,
}

impl std::fmt::Debug for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("identity", &self.identity)
            .field("endpoint", &self.endpoint)
            .field("verb", &self.verb)
            .finish_non_exhaustive()
    }
}

impl Cursor {
    pub(crate) fn new(identity: Arc<ApiIdentity>, executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            identity,
            executor,
            endpoint: None,
            verb: Method::default(),
        }
    }

    /// Sets the endpoint name. Repeated calls overwrite.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] for an empty or blank name, with prior
    /// state untouched.
    pub fn endpoint(&mut self, name: &str) -> Result<&mut Self, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "an endpoint name is required".to_string(),
            ));
        }

        self.endpoint = Some(name.to_string());
        Ok(self)
    }

    /// Sets the HTTP verb, normalized to upper-case. Repeated calls
    /// overwrite, in any order relative to [`Cursor::endpoint`].
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] for an empty verb,
    /// [`CoreError::UnsupportedMethod`] for a token outside the canonical
    /// registry. Prior state is untouched on either.
    pub fn method(&mut self, verb: &str) -> Result<&mut Self, CoreError> {
        if verb.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "an HTTP verb is required".to_string(),
            ));
        }

        self.verb = Method::parse(verb)?;
        Ok(self)
    }

    /// The currently configured endpoint name.
    pub fn endpoint_name(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// The currently configured verb.
    pub fn verb(&self) -> Method {
        self.verb
    }

    /// Resolves the accumulated configuration plus `args` into one request
    /// and executes it.
    ///
    /// The outcome passes through from the executor verbatim; the cursor
    /// never interprets status codes. Fails with [`CoreError::NotConfigured`]
    /// before touching the executor when no endpoint is set — delivered
    /// through the returned future, never a panic.
    pub async fn call(&self, args: CallArgs) -> Result<CallOutcome, ClientError> {
        let (identifier, options) = args.into_parts();
        self.dispatch(identifier, options).await
    }

    /// Like [`Cursor::call`], additionally reporting the outcome to
    /// `callback` before the returned future resolves.
    ///
    /// The callback and the future observe the same outcome; they are two
    /// observers of one invocation, not sequential steps.
    pub async fn call_with_callback<F>(
        &self,
        args: CallArgs,
        callback: F,
    ) -> Result<CallOutcome, ClientError>
    where
        F: FnOnce(&Result<CallOutcome, ClientError>) + Send,
    {
        let outcome = self.call(args).await;
        callback(&outcome);
        outcome
    }

    async fn dispatch(
        &self,
        identifier: Option<Identifier>,
        options: CallOptions,
    ) -> Result<CallOutcome, ClientError> {
        // Configuration is captured here, before any suspension point.
        let Some(endpoint) = self.endpoint.clone() else {
            return Err(CoreError::NotConfigured.into());
        };
        let verb = self.verb;

        let CallOptions {
            mut headers,
            query,
            body,
        } = options;

        // The bound identity's token always wins over caller-supplied
        // Authorization headers, whatever their casing.
        headers.retain(|name, _| !name.eq_ignore_ascii_case(AUTHORIZATION));
        headers.insert(
            AUTHORIZATION.to_string(),
            format!("Bearer {}", self.identity.token),
        );

        let mut path = format!("{}/{}", self.identity.map_id, endpoint);
        if let Some(identifier) = &identifier {
            path.push('/');
            path.push_str(&identifier.to_string());
        }

        let request = ApiRequest {
            method: verb,
            protocol: self.identity.protocol,
            hostname: self.identity.hostname.clone(),
            port: self.identity.port,
            path,
            headers,
            query,
            body,
        };

        debug!(method = %verb, path = %request.path, "dispatching data call");
        self.executor.execute(request).await
    }
}
