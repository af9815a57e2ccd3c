//! Union fields that fall back to raw JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Either a typed value or the raw JSON it failed to parse as.
///
/// Parsing tries `T` first and keeps the original value as [`Loose::Raw`]
/// when that fails for any reason. A nested object with a typo therefore
/// degrades to opaque data instead of rejecting the whole payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Loose<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Loose<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            Loose::Typed(t) => Some(t),
            Loose::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&Value> {
        match self {
            Loose::Typed(_) => None,
            Loose::Raw(v) => Some(v),
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Loose::Typed(t) => Some(t),
            Loose::Raw(_) => None,
        }
    }
}

impl<T> From<T> for Loose<T> {
    fn from(value: T) -> Self {
        Loose::Typed(value)
    }
}

impl<T: Serialize> Serialize for Loose<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Loose::Typed(t) => t.serialize(serializer),
            Loose::Raw(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Loose<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        match T::deserialize(&raw) {
            Ok(typed) => Ok(Loose::Typed(typed)),
            Err(e) => {
                tracing::debug!(
                    target_type = std::any::type_name::<T>(),
                    error = %e,
                    "union field kept as raw JSON"
                );
                Ok(Loose::Raw(raw))
            }
        }
    }
}
