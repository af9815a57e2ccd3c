//! The serialization contract shared by every payload type.

use crate::error::SchemaError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys not matched to any declared field, kept in arrival order.
pub type AdditionalProperties = Map<String, Value>;

/// A typed record mirroring one JSON object schema.
///
/// Implementors are serde structs whose first field is
/// `#[serde(flatten)] additional_properties: AdditionalProperties`. Declared
/// fields are serialized after the bag, so a declared key always wins over a
/// same-named bag entry.
pub trait Model: Serialize + DeserializeOwned {
    /// Type name used in error messages.
    const NAME: &'static str;

    fn additional_properties(&self) -> &AdditionalProperties;

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties;

    /// Serialize into a JSON object. Absent optional fields are omitted.
    fn to_json(&self) -> Result<Map<String, Value>, SchemaError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SchemaError::not_an_object(Self::NAME)),
            Err(e) => Err(SchemaError::from_serde(Self::NAME, &e)),
        }
    }

    /// Parse from a JSON object. The input is left untouched.
    fn from_json(map: &Map<String, Value>) -> Result<Self, SchemaError> {
        serde_json::from_value(Value::Object(map.clone()))
            .map_err(|e| SchemaError::from_serde(Self::NAME, &e))
    }

    /// Parse from any JSON value, rejecting non-objects.
    fn from_value(value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(map) => Self::from_json(map),
            _ => Err(SchemaError::not_an_object(Self::NAME)),
        }
    }

    fn additional_keys(&self) -> Vec<&str> {
        self.additional_properties()
            .keys()
            .map(String::as_str)
            .collect()
    }

    fn get_additional(&self, key: &str) -> Option<&Value> {
        self.additional_properties().get(key)
    }

    fn set_additional(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.additional_properties_mut().insert(key.into(), value)
    }

    fn remove_additional(&mut self, key: &str) -> Option<Value> {
        self.additional_properties_mut().remove(key)
    }

    fn contains_additional(&self, key: &str) -> bool {
        self.additional_properties().contains_key(key)
    }
}

/// Parse a JSON array of models, failing on the first bad element.
pub fn parse_list<M: Model>(value: &Value) -> Result<Vec<M>, SchemaError> {
    match value {
        Value::Array(items) => items.iter().map(M::from_value).collect(),
        _ => Err(SchemaError::new(format!(
            "expected a JSON array of `{}`",
            M::NAME
        ))),
    }
}
