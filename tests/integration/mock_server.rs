//! Mock HTTP server setup for integration tests

use mockito::{Mock, Server, ServerGuard};
use rag_engine_client::{Client, ClientBuilder, RagClient};

/// Test fixture that owns a mock server and builds clients pointed at it
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// For plain `#[test]`s driving the blocking API
    pub fn new_blocking() -> Self {
        let server = Server::new();
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self) -> Client {
        ClientBuilder::new()
            .base_url(&self.base_url)
            .build()
            .expect("client")
    }

    pub fn raising_client(&self) -> Client {
        ClientBuilder::new()
            .base_url(&self.base_url)
            .raise_on_unexpected_status(true)
            .build()
            .expect("client")
    }

    pub fn rag(&self) -> RagClient {
        RagClient::new(&self.base_url, "test-model").expect("rag client")
    }

    /// Create a mock answering `method path` with a JSON body
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub const NODE: &str = r#"{
    "doc_id": "d1",
    "node_id": "n1",
    "text": "Rust is a systems language.",
    "score": 0.91,
    "metadata": {"source": "wiki"}
}"#;

pub const VALIDATION_BODY: &str =
    r#"{"detail":[{"loc":["body","query"],"msg":"Field required","type":"missing"}]}"#;

pub fn completion_body(content: &str) -> String {
    format!(
        r#"{{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1717000000,
            "model": "test-model",
            "choices": [{{
                "index": 0,
                "finish_reason": "stop",
                "message": {{"role": "assistant", "content": "{content}"}}
            }}],
            "usage": {{"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}},
            "source_nodes": [{NODE}]
        }}"#
    )
}
