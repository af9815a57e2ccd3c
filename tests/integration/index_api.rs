//! Index management operations through `Client::execute`

use crate::integration::mock_server::MockServerFixture;
use mockito::Matcher;
use rag_engine_client::api::{
    CreateIndex, DeleteDocumentsInIndex, DeleteIndex, ListDocumentsInIndex, ListIndexes,
    LoadIndex, PersistIndex, UpdateDocumentsInIndex,
};
use rag_engine_client::models::{
    DeleteDocumentRequest, Document, IndexRequest, UpdateDocumentRequest,
};
use rag_engine_client::Parsed;
use serde_json::json;

#[tokio::test]
async fn index_returns_documents_with_ids() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/index")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "index_name": "t",
            "documents": [{"text": "x"}]
        })))
        .with_status(200)
        .with_body(r#"[{"text": "x", "doc_id": "d1", "hash_value": "abc"}]"#)
        .create_async()
        .await;

    let request = IndexRequest::new("t", vec![Document::new("x")]);
    let response = fixture
        .client()
        .execute(&CreateIndex::new(request))
        .await
        .expect("index");

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    let documents = response.into_result().expect("success");
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].doc_id(), Some("d1"));
    assert_eq!(documents[0].text, "x");
}

#[tokio::test]
async fn list_documents_sends_only_defaults() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/indexes/docs/documents")
        .match_query(Matcher::Exact("limit=10&offset=0".to_string()))
        .with_status(200)
        .with_body(r#"{"documents": [{"text": "a", "doc_id": "1"}], "count": 1}"#)
        .create_async()
        .await;

    let page = fixture
        .client()
        .send(&ListDocumentsInIndex::new("docs"))
        .await
        .expect("list")
        .and_then(Parsed::into_success)
        .expect("success");

    mock.assert_async().await;
    assert_eq!(page.count, 1);
    assert_eq!(page.documents[0].doc_id(), Some("1"));
}

#[tokio::test]
async fn list_documents_forwards_explicit_parameters() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/indexes/docs/documents")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("offset".into(), "4".into()),
            Matcher::UrlEncoded("max_text_length".into(), "100".into()),
            Matcher::UrlEncoded("metadata_filter".into(), r#"{"lang":"en"}"#.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"documents": [], "count": 0}"#)
        .create_async()
        .await;

    let endpoint = ListDocumentsInIndex::new("docs")
        .with_limit(2)
        .with_offset(4)
        .with_max_text_length(100)
        .with_metadata_filter(r#"{"lang":"en"}"#);
    let response = fixture.client().execute(&endpoint).await.expect("list");

    mock.assert_async().await;
    assert!(response.is_success());
}

#[tokio::test]
async fn index_names_are_percent_encoded() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("DELETE", "/indexes/team%20a%2Fb", 200, r#"{"message": "deleted"}"#)
        .await;

    let value = fixture
        .client()
        .execute(&DeleteIndex::new("team a/b"))
        .await
        .expect("delete")
        .into_result()
        .expect("success");

    mock.assert_async().await;
    assert_eq!(value, json!({"message": "deleted"}));
}

#[tokio::test]
async fn update_documents_reports_each_bucket() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/indexes/docs/documents")
        .match_body(Matcher::Json(json!({
            "documents": [{"text": "new", "doc_id": "1"}]
        })))
        .with_status(200)
        .with_body(
            r#"{
                "updated_documents": [{"text": "new", "doc_id": "1"}],
                "unchanged_documents": [],
                "not_found_documents": []
            }"#,
        )
        .create_async()
        .await;

    let request = UpdateDocumentRequest::new(vec![Document::new("new").with_doc_id("1")]);
    let result = fixture
        .client()
        .execute(&UpdateDocumentsInIndex::new("docs", request))
        .await
        .expect("update")
        .into_result()
        .expect("success");

    mock.assert_async().await;
    assert_eq!(result.updated_documents.len(), 1);
    assert!(result.not_found_documents.is_empty());
}

#[tokio::test]
async fn delete_documents_posts_ids() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/indexes/docs/documents/delete")
        .match_body(Matcher::Json(json!({"doc_ids": ["1", "2"]})))
        .with_status(200)
        .with_body(r#"{"deleted_doc_ids": ["1"], "not_found_doc_ids": ["2"]}"#)
        .create_async()
        .await;

    let result = fixture
        .client()
        .execute(&DeleteDocumentsInIndex::new(
            "docs",
            DeleteDocumentRequest::new(["1", "2"]),
        ))
        .await
        .expect("delete")
        .into_result()
        .expect("success");

    mock.assert_async().await;
    assert_eq!(result.deleted_doc_ids, vec!["1".to_string()]);
    assert_eq!(result.not_found_doc_ids, vec!["2".to_string()]);
}

#[tokio::test]
async fn list_indexes_parses_names() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/indexes", 200, r#"["docs", "faq"]"#)
        .await;

    let names = fixture
        .client()
        .execute(&ListIndexes)
        .await
        .expect("list")
        .into_result()
        .expect("success");
    assert_eq!(names, vec!["docs".to_string(), "faq".to_string()]);
}

#[tokio::test]
async fn persist_and_load_send_storage_parameters() {
    let mut fixture = MockServerFixture::new().await;
    let persist = fixture
        .server
        .mock("POST", "/persist/docs")
        .match_query(Matcher::Exact("path=storage".to_string()))
        .with_status(200)
        .with_body(r#"{"message": "persisted"}"#)
        .create_async()
        .await;
    let load = fixture
        .server
        .mock("POST", "/load/docs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("path".into(), "/data/docs".into()),
            Matcher::UrlEncoded("overwrite".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"message": "loaded"}"#)
        .create_async()
        .await;

    let client = fixture.client();
    client
        .execute(&PersistIndex::new("docs"))
        .await
        .expect("persist")
        .into_result()
        .expect("success");
    client
        .execute(
            &LoadIndex::new("docs")
                .with_path("/data/docs")
                .with_overwrite(true),
        )
        .await
        .expect("load")
        .into_result()
        .expect("success");

    persist.assert_async().await;
    load.assert_async().await;
}

#[tokio::test]
async fn undocumented_status_keeps_raw_body() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/indexes", 404, r#"{"detail": "Not Found"}"#)
        .await;

    let response = fixture.client().execute(&ListIndexes).await.expect("list");
    assert_eq!(response.status, 404);
    assert!(response.parsed.is_none());
    assert_eq!(&response.content[..], br#"{"detail": "Not Found"}"#);
}
