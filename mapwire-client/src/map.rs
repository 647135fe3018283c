//! The map resource object.

use mapwire_core::{MapRecord, Method};
use serde_json::{Map as JsonMap, Value};

use crate::client::Client;
use crate::connection::Connection;
use crate::error::ClientError;

/// A map fetched from or created on the gateway.
///
/// Holds a back-reference to the client that produced it, so saves and
/// deletes route through the originating configuration without any global
/// lookup table.
#[derive(Clone)]
pub struct Map {
    record: MapRecord,
    client: Client,
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl Map {
    pub(crate) fn new(record: MapRecord, client: Client) -> Self {
        Self { record, client }
    }

    /// The gateway-assigned map identifier.
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// The editable source definition.
    pub fn source(&self) -> &JsonMap<String, Value> {
        &self.record.source
    }

    /// Mutable access to the source definition, for staging edits before a
    /// [`Map::save`].
    pub fn source_mut(&mut self) -> &mut JsonMap<String, Value> {
        &mut self.record.source
    }

    /// The underlying record.
    pub fn record(&self) -> &MapRecord {
        &self.record
    }

    /// Persists the source definition with a PUT, resolving to the map the
    /// gateway answered with.
    pub async fn save(&self) -> Result<Map, ClientError> {
        let outcome = self
            .client
            .execute_crud(
                Method::PUT,
                format!("/maps/{}", self.record.id),
                Some(self.record.save_body()),
            )
            .await?;
        self.client.map_from_outcome(outcome)
    }

    /// Deletes the map.
    pub async fn delete(self) -> Result<(), ClientError> {
        self.client.delete_map(&self.record.id).await
    }

    /// Creates a connection from this map, with optional initial data.
    pub async fn create_connection(&self, data: Option<Value>) -> Result<Connection, ClientError> {
        self.client.create_connection(&self.record.id, data).await
    }
}
