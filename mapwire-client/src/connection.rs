//! The connection resource object.

use chrono::{DateTime, Utc};
use mapwire_core::{ConnectionRecord, Method};
use serde_json::{Map as JsonMap, Value};

use crate::client::Client;
use crate::error::ClientError;

/// A connection fetched from or created on the gateway.
///
/// Like [`crate::Map`], carries a back-reference to its originating client.
#[derive(Clone)]
pub struct Connection {
    record: ConnectionRecord,
    client: Client,
}

impl Connection {
    pub(crate) fn new(record: ConnectionRecord, client: Client) -> Self {
        Self { record, client }
    }

    /// The gateway-assigned connection identifier.
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// When the connection was created. Read-only.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.record.created
    }

    /// When the connection was last updated. Read-only.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.record.updated
    }

    /// The editable fields.
    pub fn fields(&self) -> &JsonMap<String, Value> {
        &self.record.fields
    }

    /// Mutable access to the editable fields, for staging edits before a
    /// [`Connection::save`].
    pub fn fields_mut(&mut self) -> &mut JsonMap<String, Value> {
        &mut self.record.fields
    }

    /// The underlying record.
    pub fn record(&self) -> &ConnectionRecord {
        &self.record
    }

    /// Persists the editable fields with a PATCH, resolving to the
    /// connection the gateway answered with.
    pub async fn save(&self) -> Result<Connection, ClientError> {
        let outcome = self
            .client
            .execute_crud(
                Method::PATCH,
                format!("/connections/{}", self.record.id),
                Some(self.record.save_body()),
            )
            .await?;
        self.client.connection_from_outcome(outcome)
    }

    /// Deletes the connection.
    pub async fn delete(self) -> Result<(), ClientError> {
        self.client.delete_connection(&self.record.id).await
    }
}
