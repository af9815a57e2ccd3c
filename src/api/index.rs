//! Index and document management operations.

use super::{model_body, parse_any, parse_model, parse_models, Endpoint, PathSegment, QueryParams};
use crate::error::SchemaError;
use crate::models::{
    DeleteDocumentRequest, DeleteDocumentResponse, Document, IndexRequest, ListDocumentsResponse,
    UpdateDocumentRequest, UpdateDocumentResponse,
};
use crate::types::Field;
use crate::Result;
use reqwest::Method;
use serde_json::Value;

/// `POST /index`: add documents to an index, creating it if needed.
#[derive(Debug, Clone)]
pub struct CreateIndex {
    pub body: IndexRequest,
}

impl CreateIndex {
    pub fn new(body: IndexRequest) -> Self {
        Self { body }
    }
}

impl Endpoint for CreateIndex {
    type Output = Vec<Document>;
    const OPERATION: &'static str = "create_index";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![PathSegment::Literal("index")]
    }

    fn body(&self) -> std::result::Result<Option<Value>, SchemaError> {
        model_body(&self.body)
    }

    fn parse_success(&self, body: &[u8]) -> Result<Vec<Document>> {
        parse_models(body)
    }
}

/// `POST /indexes/{index_name}/documents`
#[derive(Debug, Clone)]
pub struct UpdateDocumentsInIndex {
    pub index_name: String,
    pub body: UpdateDocumentRequest,
}

impl UpdateDocumentsInIndex {
    pub fn new(index_name: impl Into<String>, body: UpdateDocumentRequest) -> Self {
        Self {
            index_name: index_name.into(),
            body,
        }
    }
}

impl Endpoint for UpdateDocumentsInIndex {
    type Output = UpdateDocumentResponse;
    const OPERATION: &'static str = "update_documents_in_index";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![
            PathSegment::Literal("indexes"),
            PathSegment::Param(&self.index_name),
            PathSegment::Literal("documents"),
        ]
    }

    fn body(&self) -> std::result::Result<Option<Value>, SchemaError> {
        model_body(&self.body)
    }

    fn parse_success(&self, body: &[u8]) -> Result<UpdateDocumentResponse> {
        parse_model(body)
    }
}

/// `POST /indexes/{index_name}/documents/delete`
#[derive(Debug, Clone)]
pub struct DeleteDocumentsInIndex {
    pub index_name: String,
    pub body: DeleteDocumentRequest,
}

impl DeleteDocumentsInIndex {
    pub fn new(index_name: impl Into<String>, body: DeleteDocumentRequest) -> Self {
        Self {
            index_name: index_name.into(),
            body,
        }
    }
}

impl Endpoint for DeleteDocumentsInIndex {
    type Output = DeleteDocumentResponse;
    const OPERATION: &'static str = "delete_documents_in_index";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![
            PathSegment::Literal("indexes"),
            PathSegment::Param(&self.index_name),
            PathSegment::Literal("documents"),
            PathSegment::Literal("delete"),
        ]
    }

    fn body(&self) -> std::result::Result<Option<Value>, SchemaError> {
        model_body(&self.body)
    }

    fn parse_success(&self, body: &[u8]) -> Result<DeleteDocumentResponse> {
        parse_model(body)
    }
}

/// `GET /indexes/{index_name}/documents`: one page of documents.
///
/// `limit` and `offset` default to 10 and 0. `max_text_length` truncates the
/// text of each returned document; when left absent the engine applies its
/// own default. `metadata_filter` is a JSON-encoded object matched against
/// document metadata.
#[derive(Debug, Clone)]
pub struct ListDocumentsInIndex {
    pub index_name: String,
    pub limit: Field<i64>,
    pub offset: Field<i64>,
    pub max_text_length: Field<i64>,
    pub metadata_filter: Field<String>,
}

impl ListDocumentsInIndex {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            limit: Field::Value(10),
            offset: Field::Value(0),
            max_text_length: Field::Absent,
            metadata_filter: Field::Absent,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Field::Value(limit);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Field::Value(offset);
        self
    }

    pub fn with_max_text_length(mut self, max: i64) -> Self {
        self.max_text_length = Field::Value(max);
        self
    }

    pub fn with_metadata_filter(mut self, filter: impl Into<String>) -> Self {
        self.metadata_filter = Field::Value(filter.into());
        self
    }
}

impl Endpoint for ListDocumentsInIndex {
    type Output = ListDocumentsResponse;
    const OPERATION: &'static str = "list_documents_in_index";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![
            PathSegment::Literal("indexes"),
            PathSegment::Param(&self.index_name),
            PathSegment::Literal("documents"),
        ]
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("limit", &self.limit)
            .push("offset", &self.offset)
            .push("max_text_length", &self.max_text_length)
            .push("metadata_filter", &self.metadata_filter);
        params
    }

    fn parse_success(&self, body: &[u8]) -> Result<ListDocumentsResponse> {
        parse_model(body)
    }
}

/// `GET /indexes`: names of all indexes.
#[derive(Debug, Clone, Default)]
pub struct ListIndexes;

impl Endpoint for ListIndexes {
    type Output = Vec<String>;
    const OPERATION: &'static str = "list_indexes";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![PathSegment::Literal("indexes")]
    }

    fn parse_success(&self, body: &[u8]) -> Result<Vec<String>> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// `POST /persist/{index_name}`: write an index to a path on the engine.
#[derive(Debug, Clone)]
pub struct PersistIndex {
    pub index_name: String,
    pub path: Field<String>,
}

impl PersistIndex {
    /// Persists under the engine-relative default path `storage`.
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            path: Field::Value("storage".to_string()),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Field::Value(path.into());
        self
    }
}

impl Endpoint for PersistIndex {
    type Output = Value;
    const OPERATION: &'static str = "persist_index";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![
            PathSegment::Literal("persist"),
            PathSegment::Param(&self.index_name),
        ]
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("path", &self.path);
        params
    }

    fn parse_success(&self, body: &[u8]) -> Result<Value> {
        parse_any(body)
    }
}

/// `POST /load/{index_name}`: load a previously persisted index.
#[derive(Debug, Clone)]
pub struct LoadIndex {
    pub index_name: String,
    pub path: Field<String>,
    pub overwrite: Field<bool>,
}

impl LoadIndex {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            path: Field::Absent,
            overwrite: Field::Value(false),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Field::Value(path.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Field::Value(overwrite);
        self
    }
}

impl Endpoint for LoadIndex {
    type Output = Value;
    const OPERATION: &'static str = "load_index";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![PathSegment::Literal("load"), PathSegment::Param(&self.index_name)]
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("path", &self.path)
            .push("overwrite", &self.overwrite);
        params
    }

    fn parse_success(&self, body: &[u8]) -> Result<Value> {
        parse_any(body)
    }
}

/// `DELETE /indexes/{index_name}`
#[derive(Debug, Clone)]
pub struct DeleteIndex {
    pub index_name: String,
}

impl DeleteIndex {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
        }
    }
}

impl Endpoint for DeleteIndex {
    type Output = Value;
    const OPERATION: &'static str = "delete_index";

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![
            PathSegment::Literal("indexes"),
            PathSegment::Param(&self.index_name),
        ]
    }

    fn parse_success(&self, body: &[u8]) -> Result<Value> {
        parse_any(body)
    }
}
