//! The SDK entry point: map and connection management plus API handles.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mapwire_core::{
    ApiRequest, CallOutcome, ConnectionRecord, CoreError, MapRecord, Method,
};
use serde_json::Value;
use tracing::{instrument, warn};

use crate::api::{Api, ApiIdentity};
use crate::config::{ClientBuilder, ClientConfig};
use crate::connection::Connection;
use crate::error::ClientError;
use crate::executor::RequestExecutor;
use crate::map::Map;

/// The Mapwire client.
///
/// Cheap to clone; clones share the configuration, the executor, and the
/// API-handle registry. Management (CRUD) calls go to the configured
/// hostname and interpret non-2xx responses as [`ClientError::Remote`];
/// data calls are made through [`Api`] handles and pass outcomes through
/// uninterpreted.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    executor: Arc<dyn RequestExecutor>,
    handles: Mutex<HashMap<String, Api>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client with the given API key and default settings.
    pub fn new(token: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder(token).build()
    }

    /// Returns a builder for customized settings.
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    pub(crate) fn from_parts(config: ClientConfig, executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                config,
                executor,
                handles: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// The validated configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    fn handles(&self) -> MutexGuard<'_, HashMap<String, Api>> {
        self.inner
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // API handles
    // ========================================================================

    /// Builds an [`Api`] handle bound to the given map, using the client's
    /// token, and registers it for [`Client::map`] lookups.
    pub fn api(&self, map_id: &str) -> Result<Api, CoreError> {
        self.bind(map_id, None)
    }

    /// Like [`Client::api`], with a token that overrides the client's for
    /// calls made through this handle.
    pub fn api_with_token(&self, map_id: &str, token: &str) -> Result<Api, CoreError> {
        self.bind(map_id, Some(token))
    }

    /// Returns the registered handle for the given map, creating and
    /// registering one when none exists yet.
    pub fn map(&self, map_id: &str) -> Result<Api, CoreError> {
        let existing = self.handles().get(map_id).cloned();
        match existing {
            Some(api) => Ok(api),
            None => self.bind(map_id, None),
        }
    }

    /// Like [`Client::map`], but a token override always binds a fresh
    /// handle, replacing any registered one.
    pub fn map_with_token(&self, map_id: &str, token: &str) -> Result<Api, CoreError> {
        self.bind(map_id, Some(token))
    }

    fn bind(&self, map_id: &str, token: Option<&str>) -> Result<Api, CoreError> {
        if map_id.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "an API map id is required".to_string(),
            ));
        }

        let config = &self.inner.config;
        let identity = ApiIdentity {
            map_id: map_id.to_string(),
            token: token.unwrap_or(&config.token).to_string(),
            hostname: config.data_hostname.clone(),
            protocol: config.protocol,
            port: None,
            allow_unauthorized: config.allow_unauthorized,
        };

        let api = Api::new(identity, Arc::clone(&self.inner.executor));
        self.handles().insert(map_id.to_string(), api.clone());
        Ok(api)
    }

    // ========================================================================
    // Map management
    // ========================================================================

    /// Creates a map from the given source definition.
    #[instrument(skip(self, source))]
    pub async fn create_map(&self, source: Value) -> Result<Map, ClientError> {
        let outcome = self
            .execute_crud(Method::POST, "/maps".to_string(), Some(source))
            .await?;
        self.map_from_outcome(outcome)
    }

    /// Fetches the map with the given id.
    #[instrument(skip(self))]
    pub async fn get_map(&self, map_id: &str) -> Result<Map, ClientError> {
        let outcome = self
            .execute_crud(Method::GET, format!("/maps/{map_id}"), None)
            .await?;
        self.map_from_outcome(outcome)
    }

    /// Deletes the map with the given id and drops its registered handle.
    #[instrument(skip(self))]
    pub async fn delete_map(&self, map_id: &str) -> Result<(), ClientError> {
        self.execute_crud(Method::DELETE, format!("/maps/{map_id}"), None)
            .await?;
        self.handles().remove(map_id);
        Ok(())
    }

    // ========================================================================
    // Connection management
    // ========================================================================

    /// Creates a connection from the given map, with optional initial data.
    #[instrument(skip(self, data))]
    pub async fn create_connection(
        &self,
        map_id: &str,
        data: Option<Value>,
    ) -> Result<Connection, ClientError> {
        let outcome = self
            .execute_crud(
                Method::POST,
                format!("/maps/{map_id}/connections"),
                data,
            )
            .await?;
        self.connection_from_outcome(outcome)
    }

    /// Fetches the connection with the given id.
    #[instrument(skip(self))]
    pub async fn get_connection(&self, connection_id: &str) -> Result<Connection, ClientError> {
        let outcome = self
            .execute_crud(Method::GET, format!("/connections/{connection_id}"), None)
            .await?;
        self.connection_from_outcome(outcome)
    }

    /// Deletes the connection with the given id.
    #[instrument(skip(self))]
    pub async fn delete_connection(&self, connection_id: &str) -> Result<(), ClientError> {
        self.execute_crud(Method::DELETE, format!("/connections/{connection_id}"), None)
            .await?;
        Ok(())
    }

    // ========================================================================
    // Internals shared with the resource objects
    // ========================================================================

    pub(crate) async fn execute_crud(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<CallOutcome, ClientError> {
        let config = &self.inner.config;

        let mut headers = BTreeMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token),
        );

        let request = ApiRequest {
            method,
            protocol: config.protocol,
            hostname: config.hostname.clone(),
            port: Some(config.port),
            path,
            headers,
            query: BTreeMap::new(),
            body,
        };

        let outcome = self.inner.executor.execute(request).await?;

        if !outcome.response.is_success() {
            warn!(status = outcome.response.status, "gateway rejected request");
            return Err(ClientError::Remote {
                status: outcome.response.status,
                message: outcome.remote_message(),
            });
        }

        Ok(outcome)
    }

    pub(crate) fn map_from_outcome(&self, outcome: CallOutcome) -> Result<Map, ClientError> {
        let value = outcome.body.into_json().ok_or_else(|| {
            CoreError::InvalidData("expected a JSON map body".to_string())
        })?;
        let record = MapRecord::from_value(value)?;
        Ok(Map::new(record, self.clone()))
    }

    pub(crate) fn connection_from_outcome(
        &self,
        outcome: CallOutcome,
    ) -> Result<Connection, ClientError> {
        let value = outcome.body.into_json().ok_or_else(|| {
            CoreError::InvalidData("expected a JSON connection body".to_string())
        })?;
        let record = ConnectionRecord::from_value(value)?;
        Ok(Connection::new(record, self.clone()))
    }
}
