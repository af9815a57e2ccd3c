//! # rag-engine-client
//!
//! 这是 RAG Engine 服务的 Rust 客户端，提供类型化的模型与同步/异步接口调用。
//!
//! Typed client for a RAG Engine service: document indexing, retrieval
//! queries with LLM post-processing, index management and OpenAI-compatible
//! chat completions.
//!
//! ## Overview
//!
//! Every remote operation is an [`api::Endpoint`] value executed by a
//! [`Client`], either awaited or on the blocking path. The wire models in
//! [`models`] round-trip unknown keys and distinguish an absent field from
//! an explicit `null`.
//!
//! - **Typed responses**: `200` parses into the operation's schema, `422`
//!   into [`models::HttpValidationError`]
//! - **Lossless models**: extra keys survive `from_json` / `to_json`
//! - **Tolerant unions**: payloads that fit no declared shape are kept as raw
//!   JSON via [`types::Loose`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rag_engine_client::models::Document;
//! use rag_engine_client::RagClient;
//!
//! #[tokio::main]
//! async fn main() -> rag_engine_client::Result<()> {
//!     let rag = RagClient::new("http://localhost:5000", "phi-3-mini")?;
//!
//!     rag.index_documents("docs", vec![Document::new("Rust is a systems language.")])
//!         .await?;
//!     let answer = rag.query("docs", "What is Rust?", 0.7, 256, 5).await?;
//!     println!("{:?}", answer.response);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | One [`api::Endpoint`] per remote operation |
//! | [`client`] | [`Client`], [`ClientBuilder`] and the [`RagClient`] facade |
//! | [`models`] | Request and response schemas |
//! | [`transport`] | URL construction and HTTP dispatch |
//! | [`types`] | Field presence, raw fallback, literals and response wrappers |

pub mod api;
pub mod client;
pub mod models;
pub mod transport;
pub mod types;

pub use client::{ChatOptions, Client, ClientBuilder, RagClient};
pub use types::{Parsed, Response};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, SchemaError};
