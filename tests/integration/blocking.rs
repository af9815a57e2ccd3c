//! Blocking variants, driven from plain threads

use crate::integration::mock_server::{MockServerFixture, VALIDATION_BODY};
use mockito::Matcher;
use rag_engine_client::api::{ListIndexes, QueryIndex};
use rag_engine_client::models::{Document, QueryRequest};
use rag_engine_client::{ChatOptions, ClientBuilder, Error, Parsed};
use serde_json::json;

#[test]
fn execute_blocking_parses_success() {
    let mut fixture = MockServerFixture::new_blocking();
    let mock = fixture
        .server
        .mock("GET", "/indexes")
        .with_status(200)
        .with_body(r#"["docs"]"#)
        .create();

    let response = fixture.client().execute_blocking(&ListIndexes).expect("list");
    mock.assert();
    assert_eq!(
        response.parsed,
        Some(Parsed::Success(vec!["docs".to_string()]))
    );
}

#[test]
fn send_blocking_returns_validation_value() {
    let mut fixture = MockServerFixture::new_blocking();
    let _mock = fixture
        .server
        .mock("POST", "/query")
        .with_status(422)
        .with_body(VALIDATION_BODY)
        .create();

    let parsed = fixture
        .client()
        .send_blocking(&QueryIndex::new(QueryRequest::new("docs", "")))
        .expect("send");
    assert!(parsed.and_then(|p| p.validation_error().cloned()).is_some());
}

#[test]
fn blocking_raise_policy_applies() {
    let mut fixture = MockServerFixture::new_blocking();
    let _mock = fixture
        .server
        .mock("GET", "/indexes")
        .with_status(503)
        .with_body("unavailable")
        .create();

    let err = fixture
        .raising_client()
        .execute_blocking(&ListIndexes)
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 503, .. }));
}

#[test]
fn rag_blocking_round_trip() {
    let mut fixture = MockServerFixture::new_blocking();
    let index = fixture
        .server
        .mock("POST", "/index")
        .match_body(Matcher::Json(json!({
            "index_name": "t",
            "documents": [{"text": "x"}]
        })))
        .with_status(200)
        .with_body(r#"[{"text": "x", "doc_id": "d1"}]"#)
        .create();
    let delete = fixture
        .server
        .mock("POST", "/indexes/t/documents/delete")
        .match_body(Matcher::Json(json!({"doc_ids": ["d1"]})))
        .with_status(200)
        .with_body(r#"{"deleted_doc_ids": ["d1"], "not_found_doc_ids": []}"#)
        .create();

    let rag = fixture.rag();
    let documents = rag
        .index_documents_blocking("t", vec![Document::new("x")])
        .expect("index");
    let ids: Vec<&str> = documents.iter().filter_map(|d| d.doc_id()).collect();
    let deleted = rag.delete_documents_blocking("t", ids).expect("delete");

    index.assert();
    delete.assert();
    assert_eq!(deleted.deleted_doc_ids, vec!["d1".to_string()]);
}

#[test]
fn rag_chat_blocking_surfaces_validation() {
    let mut fixture = MockServerFixture::new_blocking();
    let _mock = fixture
        .server
        .mock("POST", "/v1/chat/completions")
        .with_status(422)
        .with_body(VALIDATION_BODY)
        .create();

    let err = fixture
        .rag()
        .chat_blocking("hi", ChatOptions::default())
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[test]
fn injected_blocking_client_is_used() {
    let mut fixture = MockServerFixture::new_blocking();
    let mock = fixture
        .server
        .mock("GET", "/indexes")
        .match_header("x-team", "search")
        .with_status(200)
        .with_body("[]")
        .create();

    let mut defaults = reqwest::header::HeaderMap::new();
    defaults.insert("x-team", reqwest::header::HeaderValue::from_static("search"));
    let http = reqwest::blocking::Client::builder()
        .default_headers(defaults)
        .build()
        .expect("reqwest client");
    let client = ClientBuilder::new()
        .base_url(&fixture.base_url)
        .blocking_http_client(http)
        .build()
        .expect("client");

    let response = client.execute_blocking(&ListIndexes).expect("list");
    mock.assert();
    assert!(response.is_success());
}
