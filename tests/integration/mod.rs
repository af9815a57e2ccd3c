//! Integration tests against a mock RAG Engine

pub mod blocking;
pub mod chat_api;
pub mod index_api;
pub mod mock_server;
pub mod rag_client;
