//! API handles and the identity a cursor is bound to.

use std::sync::Arc;

use mapwire_core::{CoreError, Protocol};

use crate::cursor::Cursor;
use crate::executor::RequestExecutor;

/// The immutable context a data-call cursor is bound to.
///
/// Carries the map identifier, the bearer token, and the data-call target.
/// Shared read-only between a handle and every cursor it produces; nothing
/// mutates it after construction.
#[derive(Debug, Clone)]
pub struct ApiIdentity {
    /// Identifier of the map this identity is bound to.
    pub map_id: String,
    /// API key sent as the bearer token.
    pub token: String,
    /// Data-call hostname.
    pub hostname: String,
    /// URL scheme for data calls.
    pub protocol: Protocol,
    /// Explicit data-call port; scheme default when unset.
    pub port: Option<u16>,
    /// Accept invalid TLS certificates. Local development only.
    pub allow_unauthorized: bool,
}

/// A handle bound to one API map, producing data-call cursors.
#[derive(Clone)]
pub struct Api {
    identity: Arc<ApiIdentity>,
    executor: Arc<dyn RequestExecutor>,
}

impl Api {
    pub(crate) fn new(identity: ApiIdentity, executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            identity: Arc::new(identity),
            executor,
        }
    }

    /// The identity this handle is bound to.
    pub fn identity(&self) -> &ApiIdentity {
        &self.identity
    }

    /// The bound map identifier.
    pub fn map_id(&self) -> &str {
        &self.identity.map_id
    }

    /// Returns a fresh, unconfigured cursor.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(Arc::clone(&self.identity), Arc::clone(&self.executor))
    }

    /// Returns a cursor with the endpoint already set.
    pub fn endpoint(&self, name: &str) -> Result<Cursor, CoreError> {
        let mut cursor = self.cursor();
        cursor.endpoint(name)?;
        Ok(cursor)
    }

    /// Returns a cursor with the verb already set.
    pub fn method(&self, verb: &str) -> Result<Cursor, CoreError> {
        let mut cursor = self.cursor();
        cursor.method(verb)?;
        Ok(cursor)
    }
}
