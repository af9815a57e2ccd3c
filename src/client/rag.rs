use crate::api::{
    ChatCompletions, CreateIndex, DeleteDocumentsInIndex, DeleteIndex, Endpoint,
    ListDocumentsInIndex, ListIndexes, LoadIndex, PersistIndex, QueryIndex,
    UpdateDocumentsInIndex,
};
use crate::client::builder::ClientBuilder;
use crate::client::core::Client;
use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatRequestMessage, DeleteDocumentRequest,
    DeleteDocumentResponse, Document, IndexRequest, ListDocumentsResponse, LlmParams,
    QueryRequest, QueryResponse, UpdateDocumentRequest, UpdateDocumentResponse,
};
use crate::Result;
use serde_json::{Map, Value};

/// Default directory for [`RagClient::persist_index`] and [`RagClient::load_index`].
pub const DEFAULT_STORAGE_PATH: &str = "/tmp";

/// Options for [`RagClient::chat`].
///
/// Negative `max_tokens` and `top_p` mean "not set".
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOptions {
    pub chat_history: Vec<ChatRequestMessage>,
    pub index_name: Option<String>,
    pub temperature: f64,
    pub max_tokens: i64,
    pub top_p: f64,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            chat_history: Vec::new(),
            index_name: None,
            temperature: 0.7,
            max_tokens: -1,
            top_p: -1.0,
        }
    }
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(mut self, history: Vec<ChatRequestMessage>) -> Self {
        self.chat_history = history;
        self
    }

    /// Retrieve context from this index before answering.
    pub fn index(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }
}

/// Task-oriented wrapper over [`Client`] bound to one chat model.
///
/// Unlike [`Client::execute`], every method returns the `200` body directly:
/// a `422` becomes [`crate::Error::Validation`] and any other status becomes
/// [`crate::Error::UnexpectedStatus`].
///
/// Only `200` counts as success, including for the 2xx codes the engine does
/// not document: a `201` or `204` is reported as `UnexpectedStatus`.
#[derive(Debug, Clone)]
pub struct RagClient {
    client: Client,
    model_name: String,
}

impl RagClient {
    /// Connect to `base_url` with default transport settings.
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Result<Self> {
        let client = ClientBuilder::new().base_url(base_url).build()?;
        Ok(Self::from_client(client, model_name))
    }

    pub fn from_client(client: Client, model_name: impl Into<String>) -> Self {
        Self {
            client,
            model_name: model_name.into(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn call<E: Endpoint>(&self, endpoint: E) -> Result<E::Output> {
        self.client.execute(&endpoint).await?.into_result()
    }

    fn call_blocking<E: Endpoint>(&self, endpoint: E) -> Result<E::Output> {
        self.client.execute_blocking(&endpoint)?.into_result()
    }

    pub async fn index_documents(
        &self,
        index_name: &str,
        documents: Vec<Document>,
    ) -> Result<Vec<Document>> {
        self.call(CreateIndex::new(IndexRequest::new(index_name, documents)))
            .await
    }

    pub fn index_documents_blocking(
        &self,
        index_name: &str,
        documents: Vec<Document>,
    ) -> Result<Vec<Document>> {
        self.call_blocking(CreateIndex::new(IndexRequest::new(index_name, documents)))
    }

    pub async fn query(
        &self,
        index_name: &str,
        query: &str,
        temperature: f64,
        max_tokens: i64,
        top_k: i64,
    ) -> Result<QueryResponse> {
        self.call(query_endpoint(index_name, query, temperature, max_tokens, top_k))
            .await
    }

    pub fn query_blocking(
        &self,
        index_name: &str,
        query: &str,
        temperature: f64,
        max_tokens: i64,
        top_k: i64,
    ) -> Result<QueryResponse> {
        self.call_blocking(query_endpoint(index_name, query, temperature, max_tokens, top_k))
    }

    /// Send `query` as a user message after `options.chat_history`.
    pub async fn chat(&self, query: &str, options: ChatOptions) -> Result<ChatCompletionResponse> {
        self.call(ChatCompletions::new(self.chat_request(query, options)))
            .await
    }

    pub fn chat_blocking(&self, query: &str, options: ChatOptions) -> Result<ChatCompletionResponse> {
        self.call_blocking(ChatCompletions::new(self.chat_request(query, options)))
    }

    pub async fn update_documents(
        &self,
        index_name: &str,
        documents: Vec<Document>,
    ) -> Result<UpdateDocumentResponse> {
        self.call(UpdateDocumentsInIndex::new(
            index_name,
            UpdateDocumentRequest::new(documents),
        ))
        .await
    }

    pub fn update_documents_blocking(
        &self,
        index_name: &str,
        documents: Vec<Document>,
    ) -> Result<UpdateDocumentResponse> {
        self.call_blocking(UpdateDocumentsInIndex::new(
            index_name,
            UpdateDocumentRequest::new(documents),
        ))
    }

    pub async fn delete_documents<I, S>(
        &self,
        index_name: &str,
        doc_ids: I,
    ) -> Result<DeleteDocumentResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call(DeleteDocumentsInIndex::new(
            index_name,
            DeleteDocumentRequest::new(doc_ids),
        ))
        .await
    }

    pub fn delete_documents_blocking<I, S>(
        &self,
        index_name: &str,
        doc_ids: I,
    ) -> Result<DeleteDocumentResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_blocking(DeleteDocumentsInIndex::new(
            index_name,
            DeleteDocumentRequest::new(doc_ids),
        ))
    }

    /// Page through an index. An empty or missing filter is not sent.
    pub async fn list_documents(
        &self,
        index_name: &str,
        metadata_filter: Option<&Map<String, Value>>,
        limit: i64,
        offset: i64,
    ) -> Result<ListDocumentsResponse> {
        let endpoint = list_endpoint(index_name, metadata_filter, limit, offset)?;
        self.call(endpoint).await
    }

    pub fn list_documents_blocking(
        &self,
        index_name: &str,
        metadata_filter: Option<&Map<String, Value>>,
        limit: i64,
        offset: i64,
    ) -> Result<ListDocumentsResponse> {
        let endpoint = list_endpoint(index_name, metadata_filter, limit, offset)?;
        self.call_blocking(endpoint)
    }

    pub async fn list_indexes(&self) -> Result<Vec<String>> {
        self.call(ListIndexes).await
    }

    pub fn list_indexes_blocking(&self) -> Result<Vec<String>> {
        self.call_blocking(ListIndexes)
    }

    /// `path` defaults to [`DEFAULT_STORAGE_PATH`].
    pub async fn persist_index(&self, index_name: &str, path: Option<&str>) -> Result<Value> {
        self.call(persist_endpoint(index_name, path)).await
    }

    pub fn persist_index_blocking(&self, index_name: &str, path: Option<&str>) -> Result<Value> {
        self.call_blocking(persist_endpoint(index_name, path))
    }

    /// `path` defaults to [`DEFAULT_STORAGE_PATH`]; an existing index is
    /// replaced unless `overwrite` is `false`.
    pub async fn load_index(
        &self,
        index_name: &str,
        path: Option<&str>,
        overwrite: bool,
    ) -> Result<Value> {
        self.call(load_endpoint(index_name, path, overwrite)).await
    }

    pub fn load_index_blocking(
        &self,
        index_name: &str,
        path: Option<&str>,
        overwrite: bool,
    ) -> Result<Value> {
        self.call_blocking(load_endpoint(index_name, path, overwrite))
    }

    pub async fn delete_index(&self, index_name: &str) -> Result<Value> {
        self.call(DeleteIndex::new(index_name)).await
    }

    pub fn delete_index_blocking(&self, index_name: &str) -> Result<Value> {
        self.call_blocking(DeleteIndex::new(index_name))
    }

    fn chat_request(&self, query: &str, options: ChatOptions) -> ChatCompletionRequest {
        let mut messages = options.chat_history;
        messages.push(ChatRequestMessage::user(query));

        let mut request = ChatCompletionRequest::new(messages).with_model(self.model_name.clone());
        request = if options.top_p > 0.0 {
            request.with_top_p(options.top_p)
        } else {
            request.with_temperature(options.temperature)
        };
        if options.max_tokens > 0 {
            request = request.with_max_tokens(options.max_tokens);
        }
        if let Some(index_name) = options.index_name {
            request = request.with_index(index_name);
        }
        request
    }
}

fn query_endpoint(
    index_name: &str,
    query: &str,
    temperature: f64,
    max_tokens: i64,
    top_k: i64,
) -> QueryIndex {
    let llm_params = LlmParams::new()
        .with_temperature(temperature)
        .with_max_tokens(max_tokens);
    QueryIndex::new(
        QueryRequest::new(index_name, query)
            .with_top_k(top_k)
            .with_llm_params(llm_params),
    )
}

fn list_endpoint(
    index_name: &str,
    metadata_filter: Option<&Map<String, Value>>,
    limit: i64,
    offset: i64,
) -> Result<ListDocumentsInIndex> {
    let mut endpoint = ListDocumentsInIndex::new(index_name)
        .with_limit(limit)
        .with_offset(offset);
    if let Some(filter) = metadata_filter.filter(|f| !f.is_empty()) {
        endpoint = endpoint.with_metadata_filter(serde_json::to_string(filter)?);
    }
    Ok(endpoint)
}

fn persist_endpoint(index_name: &str, path: Option<&str>) -> PersistIndex {
    PersistIndex::new(index_name).with_path(path.unwrap_or(DEFAULT_STORAGE_PATH))
}

fn load_endpoint(index_name: &str, path: Option<&str>, overwrite: bool) -> LoadIndex {
    LoadIndex::new(index_name)
        .with_path(path.unwrap_or(DEFAULT_STORAGE_PATH))
        .with_overwrite(overwrite)
}
