//! `RagClient` facade: success values or errors, never raw responses

use crate::integration::mock_server::{completion_body, MockServerFixture, NODE, VALIDATION_BODY};
use futures::future::join_all;
use mockito::Matcher;
use rag_engine_client::models::{ChatRequestMessage, Document, DocumentMetadata};
use rag_engine_client::{ChatOptions, ClientBuilder, Error, RagClient};
use serde_json::{json, Map};

#[tokio::test]
async fn requests_ask_for_json() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/indexes")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(r#"["docs"]"#)
        .create_async()
        .await;

    let names = fixture.rag().list_indexes().await.expect("list");
    mock.assert_async().await;
    assert_eq!(names, vec!["docs".to_string()]);
}

#[tokio::test]
async fn index_documents_returns_assigned_ids() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/index")
        .match_body(Matcher::Json(json!({
            "index_name": "docs",
            "documents": [{"text": "a", "metadata": {"lang": "en"}}]
        })))
        .with_status(200)
        .with_body(r#"[{"text": "a", "doc_id": "id-1", "metadata": {"lang": "en"}}]"#)
        .create_async()
        .await;

    let metadata = DocumentMetadata::new().with("lang", "en");
    let documents = fixture
        .rag()
        .index_documents("docs", vec![Document::new("a").with_metadata(metadata)])
        .await
        .expect("index");

    mock.assert_async().await;
    assert_eq!(documents[0].doc_id(), Some("id-1"));
}

#[tokio::test]
async fn query_builds_llm_params() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/query")
        .match_body(Matcher::Json(json!({
            "index_name": "docs",
            "query": "q",
            "top_k": 3,
            "llm_params": {"temperature": 0.5, "max_tokens": 100}
        })))
        .with_status(200)
        .with_body(format!(r#"{{"response": "r", "source_nodes": [{NODE}]}}"#))
        .create_async()
        .await;

    let answer = fixture
        .rag()
        .query("docs", "q", 0.5, 100, 3)
        .await
        .expect("query");
    mock.assert_async().await;
    assert_eq!(answer.ranked_nodes()[0].doc_id, "d1");
}

#[tokio::test]
async fn chat_appends_user_message_to_history() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Json(json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hi"}
            ],
            "top_p": 0.8,
            "max_tokens": 32,
            "index_name": "docs"
        })))
        .with_status(200)
        .with_body(completion_body("hello"))
        .create_async()
        .await;

    let options = ChatOptions::new()
        .history(vec![ChatRequestMessage::system("be brief")])
        .index("docs")
        .top_p(0.8)
        .max_tokens(32);
    let completion = fixture.rag().chat("hi", options).await.expect("chat");

    mock.assert_async().await;
    assert_eq!(completion.first_content(), Some("hello"));
}

#[tokio::test]
async fn list_documents_encodes_metadata_filter() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/indexes/docs/documents")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
            Matcher::UrlEncoded("metadata_filter".into(), r#"{"lang":"en"}"#.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"documents": [], "count": 0}"#)
        .create_async()
        .await;

    let mut filter = Map::new();
    filter.insert("lang".to_string(), json!("en"));
    let page = fixture
        .rag()
        .list_documents("docs", Some(&filter), 10, 0)
        .await
        .expect("list");

    mock.assert_async().await;
    assert_eq!(page.count, 0);
}

#[tokio::test]
async fn persist_and_load_default_to_tmp() {
    let mut fixture = MockServerFixture::new().await;
    let persist = fixture
        .server
        .mock("POST", "/persist/docs")
        .match_query(Matcher::Exact("path=%2Ftmp".to_string()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let load = fixture
        .server
        .mock("POST", "/load/docs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("path".into(), "/tmp".into()),
            Matcher::UrlEncoded("overwrite".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let rag = fixture.rag();
    rag.persist_index("docs", None).await.expect("persist");
    rag.load_index("docs", None, true).await.expect("load");

    persist.assert_async().await;
    load.assert_async().await;
}

#[tokio::test]
async fn validation_failure_is_an_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("POST", "/query", 422, VALIDATION_BODY)
        .await;

    let err = fixture
        .rag()
        .query("docs", "", 0.7, -1, 5)
        .await
        .unwrap_err();
    match err {
        Error::Validation(detail) => assert_eq!(detail.errors()[0].location(), "body.query"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn any_other_status_is_an_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("DELETE", "/indexes/docs", 404, r#"{"detail": "missing"}"#)
        .await;

    let err = fixture.rag().delete_index("docs").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/indexes")
        .match_header("authorization", "Bearer s3cret")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = ClientBuilder::new()
        .base_url(&fixture.base_url)
        .token("s3cret")
        .build()
        .expect("client");
    let rag = RagClient::from_client(client, "test-model");
    assert!(rag.list_indexes().await.expect("list").is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn clones_share_one_client_across_concurrent_calls() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/indexes")
        .with_status(200)
        .with_body(r#"["docs"]"#)
        .expect(4)
        .create_async()
        .await;

    let rag = fixture.rag();
    let calls = (0..4).map(|_| {
        let rag = rag.clone();
        async move { rag.list_indexes().await }
    });
    let results = join_all(calls).await;

    mock.assert_async().await;
    assert!(results.iter().all(|r| matches!(r, Ok(names) if names.len() == 1)));
}

#[tokio::test]
async fn injected_http_client_is_used() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/indexes")
        .match_header("x-team", "search")
        .with_status(200)
        .with_body(r#"["docs"]"#)
        .create_async()
        .await;

    let mut defaults = reqwest::header::HeaderMap::new();
    defaults.insert("x-team", reqwest::header::HeaderValue::from_static("search"));
    let http = reqwest::Client::builder()
        .default_headers(defaults)
        .build()
        .expect("reqwest client");
    let client = ClientBuilder::new()
        .base_url(&fixture.base_url)
        .http_client(http)
        .build()
        .expect("client");

    let names = RagClient::from_client(client, "test-model")
        .list_indexes()
        .await
        .expect("list");
    mock.assert_async().await;
    assert_eq!(names, vec!["docs".to_string()]);
}

#[tokio::test]
async fn configured_content_type_is_sent_once() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/indexes/docs/documents/delete")
        .match_header("content-type", "application/json; charset=utf-8")
        .with_status(200)
        .with_body(r#"{"deleted_doc_ids": [], "not_found_doc_ids": ["1"]}"#)
        .create_async()
        .await;

    let client = ClientBuilder::new()
        .base_url(&fixture.base_url)
        .header("Content-Type", "application/json; charset=utf-8")
        .build()
        .expect("client");
    RagClient::from_client(client, "test-model")
        .delete_documents("docs", ["1"])
        .await
        .expect("delete");
    mock.assert_async().await;
}

#[tokio::test]
async fn undocumented_success_code_is_an_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json("GET", "/indexes", 201, "[]").await;

    let err = fixture.rag().list_indexes().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 201, .. }));
}
