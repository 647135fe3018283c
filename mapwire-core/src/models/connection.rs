//! Connection records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map as JsonMap, Value};

use crate::error::CoreError;

/// Fields the gateway owns; they are stripped from the editable set.
/// `endpoint_data` is dropped entirely, the timestamps are kept read-only.
const READ_ONLY_FIELDS: &[&str] = &["created", "updated", "endpoint_data"];

/// A connection resource: a map bound to one user's credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionRecord {
    /// Gateway-assigned connection identifier.
    pub id: String,
    /// When the connection was created.
    pub created: Option<DateTime<Utc>>,
    /// When the connection was last updated.
    pub updated: Option<DateTime<Utc>>,
    /// The editable fields, everything the gateway reported minus the
    /// read-only ones.
    pub fields: JsonMap<String, Value>,
}

impl ConnectionRecord {
    /// Parses a raw gateway response into a record.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(mut data) = value else {
            return Err(CoreError::InvalidData(
                "connection response must be a JSON object".to_string(),
            ));
        };

        let id = match data.remove("id") {
            Some(Value::String(id)) => id,
            _ => {
                return Err(CoreError::InvalidData(
                    "connection response is missing a string id".to_string(),
                ));
            }
        };

        let created = parse_timestamp(data.get("created"));
        let updated = parse_timestamp(data.get("updated"));

        for field in READ_ONLY_FIELDS {
            data.remove(*field);
        }

        Ok(Self {
            id,
            created,
            updated,
            fields: data,
        })
    }

    /// Returns the body a save sends: every editable field, never the id.
    pub fn save_body(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

fn parse_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value
        .and_then(Value::as_str)
        .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc))
}
