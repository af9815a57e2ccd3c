//! RAG Engine 客户端：底层操作执行器与面向任务的便捷封装。
//!
//! [`Client`] executes any [`crate::api::Endpoint`] and returns the full
//! [`crate::types::Response`]. [`RagClient`] sits on top and returns plain
//! success values for the common tasks.

pub mod builder;
pub mod core;
pub mod rag;

pub use builder::ClientBuilder;
pub use core::Client;
pub use rag::{ChatOptions, RagClient, DEFAULT_STORAGE_PATH};
