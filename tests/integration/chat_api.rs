//! `POST /v1/chat/completions`

use crate::integration::mock_server::{completion_body, MockServerFixture};
use mockito::Matcher;
use rag_engine_client::api::ChatCompletions;
use rag_engine_client::models::{ChatCompletionRequest, ChatRequestMessage};
use rag_engine_client::Error;
use serde_json::json;

#[tokio::test]
async fn chat_completion_with_index_returns_sources() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Json(json!({
            "model": "test-model",
            "messages": [{"role": "user", "content": "Hello"}],
            "index_name": "docs",
            "context_token_ratio": 0.5
        })))
        .with_status(200)
        .with_body(completion_body("Hi there"))
        .create_async()
        .await;

    let request = ChatCompletionRequest::new(vec![ChatRequestMessage::user("Hello")])
        .with_model("test-model")
        .with_index("docs")
        .with_context_token_ratio(0.5);
    let completion = fixture
        .client()
        .execute(&ChatCompletions::new(request))
        .await
        .expect("chat")
        .into_result()
        .expect("success");

    mock.assert_async().await;
    assert_eq!(completion.first_content(), Some("Hi there"));
    assert_eq!(completion.usage().map(|u| u.total_tokens), Some(7));
    assert_eq!(completion.source_nodes().len(), 1);
    assert_eq!(completion.source_nodes()[0].doc_id, "d1");
}

#[tokio::test]
async fn wrong_object_literal_is_rejected() {
    let mut fixture = MockServerFixture::new().await;
    let body = completion_body("x").replace("chat.completion", "text_completion");
    let _mock = fixture
        .mock_json("POST", "/v1/chat/completions", 200, &body)
        .await;

    let request = ChatCompletionRequest::new(vec![ChatRequestMessage::user("Hello")]);
    let err = fixture
        .client()
        .execute(&ChatCompletions::new(request))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Schema(_)), "got {err:?}");
}
