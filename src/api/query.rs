use super::{model_body, parse_model, Endpoint, PathSegment};
use crate::error::SchemaError;
use crate::models::{QueryRequest, QueryResponse};
use crate::Result;
use reqwest::Method;
use serde_json::Value;

/// `POST /query`: retrieve nodes, optionally rerank them and let the model
/// synthesize an answer.
#[derive(Debug, Clone)]
pub struct QueryIndex {
    pub body: QueryRequest,
}

impl QueryIndex {
    pub fn new(body: QueryRequest) -> Self {
        Self { body }
    }
}

impl Endpoint for QueryIndex {
    type Output = QueryResponse;
    const OPERATION: &'static str = "query_index";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![PathSegment::Literal("query")]
    }

    fn body(&self) -> std::result::Result<Option<Value>, SchemaError> {
        model_body(&self.body)
    }

    fn parse_success(&self, body: &[u8]) -> Result<QueryResponse> {
        parse_model(body)
    }
}
