//! 接口操作模块：每个远端操作对应一个 [`Endpoint`] 描述。
//!
//! # Operations
//!
//! An operation describes one HTTP call: method, path (with percent-encoded
//! parameters), query string, JSON body and how to read a `200` body. The
//! [`crate::Client`] executes it and maps the status code:
//!
//! | Status | Result |
//! |--------|--------|
//! | `200` | [`Parsed::Success`](crate::types::Parsed) with `Endpoint::Output` |
//! | `422` | [`Parsed::ValidationError`](crate::types::Parsed) |
//! | other | `Error::UnexpectedStatus` or `parsed = None`, per client policy |

pub mod chat;
pub mod index;
pub mod query;

pub use chat::ChatCompletions;
pub use index::{
    CreateIndex, DeleteDocumentsInIndex, DeleteIndex, ListDocumentsInIndex, ListIndexes,
    LoadIndex, PersistIndex, UpdateDocumentsInIndex,
};
pub use query::QueryIndex;

use crate::error::SchemaError;
use crate::types::{parse_list, Field, Model};
use crate::Result;
use reqwest::Method;
use serde_json::Value;

/// One piece of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Fixed text from the route template.
    Literal(&'static str),
    /// Caller-supplied value, percent-encoded as a single segment.
    Param(&'a str),
}

/// Query string under construction. Absent and null parameters are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: ToString>(&mut self, key: &'static str, value: &Field<T>) -> &mut Self {
        if let Field::Value(v) = value {
            self.0.push((key, v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Description of one remote operation.
pub trait Endpoint {
    /// Parsed body of a `200` response.
    type Output;

    /// Operation id used in logs.
    const OPERATION: &'static str;

    fn method(&self) -> Method;

    fn path(&self) -> Vec<PathSegment<'_>>;

    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    /// JSON body; `Content-Type: application/json` is added when present.
    fn body(&self) -> std::result::Result<Option<Value>, SchemaError> {
        Ok(None)
    }

    fn parse_success(&self, body: &[u8]) -> Result<Self::Output>;
}

pub(crate) fn model_body<M: Model>(model: &M) -> std::result::Result<Option<Value>, SchemaError> {
    model.to_json().map(|m| Some(Value::Object(m)))
}

/// Decode a body into a single model. Invalid JSON is a decode error,
/// a JSON shape mismatch is a schema error.
pub(crate) fn parse_model<M: Model>(body: &[u8]) -> Result<M> {
    let value: Value = serde_json::from_slice(body)?;
    Ok(M::from_value(&value)?)
}

pub(crate) fn parse_models<M: Model>(body: &[u8]) -> Result<Vec<M>> {
    let value: Value = serde_json::from_slice(body)?;
    Ok(parse_list(&value)?)
}

/// Bodies documented only as "any JSON".
pub(crate) fn parse_any(body: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(body)?)
}
