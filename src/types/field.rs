//! Three-valued optional fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional field that distinguishes "not sent" from an explicit `null`.
///
/// Declare it on a model as
/// `#[serde(default, skip_serializing_if = "Field::is_absent")]`
/// so that `Absent` is omitted from the output and restored when the key is
/// missing on input.
///
/// A `Value` whose JSON form is `null` (e.g. `Value(serde_json::Value::Null)`
/// or `Value(Loose::Raw(Null))`) is on the wire exactly an explicit `null`;
/// it compares equal to `Null` and [`Field::normalized`] collapses it.
#[derive(Debug, Clone, Default)]
pub enum Field<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }

    /// The value if present; `Absent` and `Null` both collapse to `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }
}

impl<T: Serialize> Field<T> {
    /// Whether this field is sent as JSON `null`.
    pub fn is_wire_null(&self) -> bool {
        match self {
            Field::Absent => false,
            Field::Null => true,
            Field::Value(v) => serializes_to_null(v),
        }
    }

    /// Collapse a `Value` that serializes to `null` into `Null`.
    pub fn normalized(self) -> Self {
        if self.is_wire_null() {
            Field::Null
        } else {
            self
        }
    }
}

fn serializes_to_null<T: Serialize>(value: &T) -> bool {
    matches!(serde_json::to_value(value), Ok(serde_json::Value::Null))
}

impl<T: PartialEq + Serialize> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Field::Absent, Field::Absent) | (Field::Null, Field::Null) => true,
            (Field::Value(a), Field::Value(b)) => a == b,
            (Field::Value(v), Field::Null) | (Field::Null, Field::Value(v)) => {
                serializes_to_null(v)
            }
            _ => false,
        }
    }
}

impl<T: Eq + Serialize> Eq for Field<T> {}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

/// `None` maps to an explicit `null`, not to `Absent`.
impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            // Absent is normally skipped by the container attribute.
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}
