//! 类型系统模块：字段语义、模型序列化契约与调用结果。
//!
//! # Types Module
//!
//! Building blocks shared by every model and operation.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Field`] | Optional field that tells "absent" apart from `null` |
//! | [`Loose`] | Union field: typed value with raw-JSON fallback |
//! | [`Literal`] | Field pinned to one constant string |
//! | [`Model`] | Serialize/parse contract plus the unknown-field bag |
//! | [`Response`] | Status, headers, raw body and parsed result of a call |
//!
//! ## Example
//!
//! ```rust
//! use rag_engine_client::models::QueryRequest;
//! use rag_engine_client::types::{Field, Model};
//!
//! let mut req = QueryRequest::new("docs", "what is kaito?");
//! req.set_additional("trace", serde_json::json!(true));
//!
//! let wire = req.to_json().unwrap();
//! assert_eq!(wire["top_k"], 5);
//! assert!(!wire.contains_key("llm_params"));
//!
//! let back = QueryRequest::from_json(&wire).unwrap();
//! assert_eq!(back, req);
//! assert!(matches!(back.llm_params, Field::Absent));
//! ```

pub mod field;
pub mod literal;
pub mod loose;
pub mod model;
pub mod response;

pub use field::Field;
pub use literal::{Literal, LiteralValue};
pub use loose::Loose;
pub use model::{parse_list, AdditionalProperties, Model};
pub use response::{Parsed, Response};
