//! Documents and the request/response payloads that carry them.

use crate::types::{AdditionalProperties, Field, Loose, Model};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form document metadata (`{"author": "...", ...}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_properties.insert(key.into(), value.into());
        self
    }
}

impl Model for DocumentMetadata {
    const NAME: &'static str = "DocumentMetadata";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// A document stored in an index.
///
/// `doc_id` is assigned by the engine; leave it absent when indexing new text
/// and set it when updating an existing document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub text: String,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub doc_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub metadata: Field<Loose<DocumentMetadata>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub hash_value: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_truncated: Field<bool>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_doc_id(mut self, doc_id: impl Into<String>) -> Self {
        self.doc_id = Field::Value(doc_id.into());
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Field::Value(Loose::Typed(metadata));
        self
    }

    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.value().map(String::as_str)
    }
}

impl Model for Document {
    const NAME: &'static str = "Document";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Body of `POST /index`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexRequest {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub index_name: String,
    pub documents: Vec<Document>,
}

impl IndexRequest {
    pub fn new(index_name: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            index_name: index_name.into(),
            documents,
        }
    }
}

impl Model for IndexRequest {
    const NAME: &'static str = "IndexRequest";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Body of `POST /indexes/{index_name}/documents`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub documents: Vec<Document>,
}

impl UpdateDocumentRequest {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            documents,
        }
    }
}

impl Model for UpdateDocumentRequest {
    const NAME: &'static str = "UpdateDocumentRequest";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateDocumentResponse {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub updated_documents: Vec<Document>,
    pub unchanged_documents: Vec<Document>,
    pub not_found_documents: Vec<Document>,
}

impl Model for UpdateDocumentResponse {
    const NAME: &'static str = "UpdateDocumentResponse";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Body of `POST /indexes/{index_name}/documents/delete`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDocumentRequest {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub doc_ids: Vec<String>,
}

impl DeleteDocumentRequest {
    pub fn new<I, S>(doc_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            additional_properties: AdditionalProperties::new(),
            doc_ids: doc_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl Model for DeleteDocumentRequest {
    const NAME: &'static str = "DeleteDocumentRequest";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub deleted_doc_ids: Vec<String>,
    pub not_found_doc_ids: Vec<String>,
}

impl Model for DeleteDocumentResponse {
    const NAME: &'static str = "DeleteDocumentResponse";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// One page of `GET /indexes/{index_name}/documents`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub documents: Vec<Document>,
    pub count: i64,
}

impl Model for ListDocumentsResponse {
    const NAME: &'static str = "ListDocumentsResponse";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}
