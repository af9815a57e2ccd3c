//! 数据模型模块：RAG Engine 接口的请求与响应载荷。
//!
//! # Models
//!
//! Every type here implements [`crate::types::Model`]: it serializes to a
//! JSON object, parses back from one, and keeps unknown keys in its
//! `additional_properties` bag so a round trip never loses data.
//!
//! | Module | Payloads |
//! |--------|----------|
//! | [`document`] | documents, index/update/delete/list payloads |
//! | [`query`] | `/query` request and response, scored nodes |
//! | [`chat`] | chat completion request |
//! | [`completion`] | chat completion response |
//! | [`logprobs`] | token log probabilities |
//! | [`validation`] | 422 validation errors |

pub mod chat;
pub mod completion;
pub mod document;
pub mod logprobs;
pub mod query;
pub mod validation;

pub use chat::{ChatCompletionRequest, ChatRequestMessage};
pub use completion::{
    Annotation, ChatCompletionAudio, ChatCompletionMessage, ChatCompletionMessageToolCall,
    ChatCompletionResponse, Choice, CompletionUsage, FunctionCall, ServiceTier, UrlCitation,
};
pub use document::{
    DeleteDocumentRequest, DeleteDocumentResponse, Document, DocumentMetadata, IndexRequest,
    ListDocumentsResponse, UpdateDocumentRequest, UpdateDocumentResponse,
};
pub use logprobs::{ChoiceLogprobs, TokenLogprob, TopLogprob};
pub use query::{
    LlmParams, NodeMetadata, NodeWithScore, QueryRequest, QueryResponse, QueryResponseMetadata,
    RerankParams, DEFAULT_TOP_K,
};
pub use validation::{HttpValidationError, LocationItem, ValidationError};
