//! Map records.

use serde::Serialize;
use serde_json::{Map as JsonMap, Value};

use crate::error::CoreError;

/// A map resource: an API's endpoint definition as stored by the gateway.
///
/// The gateway returns `{"id": "...", "source": {...}}`; the source object
/// carries the editable definition and is what a save sends back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRecord {
    /// Gateway-assigned map identifier.
    pub id: String,
    /// The editable endpoint definition.
    pub source: JsonMap<String, Value>,
}

impl MapRecord {
    /// Parses a raw gateway response into a record.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(mut data) = value else {
            return Err(CoreError::InvalidData(
                "map response must be a JSON object".to_string(),
            ));
        };

        let id = match data.remove("id") {
            Some(Value::String(id)) => id,
            _ => {
                return Err(CoreError::InvalidData(
                    "map response is missing a string id".to_string(),
                ));
            }
        };

        let source = match data.remove("source") {
            Some(Value::Object(source)) => source,
            None | Some(Value::Null) => JsonMap::new(),
            Some(_) => {
                return Err(CoreError::InvalidData(
                    "map source must be an object".to_string(),
                ));
            }
        };

        Ok(Self { id, source })
    }

    /// Returns the body a save sends: every editable field, never the id.
    pub fn save_body(&self) -> Value {
        Value::Object(self.source.clone())
    }
}
