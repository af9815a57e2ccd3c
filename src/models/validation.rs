//! Field-level validation errors returned with status 422.

use crate::types::{AdditionalProperties, Field, Model};
use serde::{Deserialize, Serialize};

/// One step of an error location: a key name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationItem {
    Index(i64),
    Name(String),
}

impl std::fmt::Display for LocationItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationItem::Index(i) => write!(f, "{}", i),
            LocationItem::Name(n) => f.write_str(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub loc: Vec<LocationItem>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl ValidationError {
    /// Dotted location, e.g. `body.documents.0.text`.
    pub fn location(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Model for ValidationError {
    const NAME: &'static str = "ValidationError";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub detail: Field<Vec<ValidationError>>,
}

impl HttpValidationError {
    pub fn errors(&self) -> &[ValidationError] {
        self.detail.value().map(Vec::as_slice).unwrap_or(&[])
    }

    /// `loc: msg` pairs joined for display.
    pub fn summary(&self) -> String {
        let errors = self.errors();
        if errors.is_empty() {
            return "no details".to_string();
        }
        errors
            .iter()
            .map(|e| format!("{}: {}", e.location(), e.msg))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Model for HttpValidationError {
    const NAME: &'static str = "HTTPValidationError";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}
