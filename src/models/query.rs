//! Retrieval: `POST /query` payloads and scored source nodes.

use crate::types::{AdditionalProperties, Field, Loose, Model};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of nodes retrieved per query.
pub const DEFAULT_TOP_K: i64 = 5;

/// Language-model parameters forwarded by the engine (temperature, top_p,
/// max_tokens, ...). The engine accepts any keys, so they live in the bag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LlmParams {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl LlmParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(self, temperature: f64) -> Self {
        self.with("temperature", temperature)
    }

    pub fn with_max_tokens(self, max_tokens: i64) -> Self {
        self.with("max_tokens", max_tokens)
    }

    pub fn with_top_p(self, top_p: f64) -> Self {
        self.with("top_p", top_p)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_properties.insert(key.into(), value.into());
        self
    }

    pub fn temperature(&self) -> Option<f64> {
        self.additional_properties
            .get("temperature")
            .and_then(Value::as_f64)
    }

    pub fn max_tokens(&self) -> Option<i64> {
        self.additional_properties
            .get("max_tokens")
            .and_then(Value::as_i64)
    }
}

impl Model for LlmParams {
    const NAME: &'static str = "LlmParams";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Experimental reranking parameters. Only `top_n` and `choice_batch_size`
/// are honoured by the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RerankParams {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl RerankParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: i64) -> Self {
        self.additional_properties
            .insert("top_n".to_string(), top_n.into());
        self
    }

    pub fn with_choice_batch_size(mut self, size: i64) -> Self {
        self.additional_properties
            .insert("choice_batch_size".to_string(), size.into());
        self
    }

    pub fn top_n(&self) -> Option<i64> {
        self.additional_properties.get("top_n").and_then(Value::as_i64)
    }
}

impl Model for RerankParams {
    const NAME: &'static str = "RerankParams";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Body of `POST /query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub index_name: String,
    pub query: String,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub top_k: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub llm_params: Field<Loose<LlmParams>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub rerank_params: Field<Loose<RerankParams>>,
}

impl QueryRequest {
    /// A request with `top_k` preset to [`DEFAULT_TOP_K`].
    pub fn new(index_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            index_name: index_name.into(),
            query: query.into(),
            top_k: Field::Value(DEFAULT_TOP_K),
            llm_params: Field::Absent,
            rerank_params: Field::Absent,
        }
    }

    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = Field::Value(top_k);
        self
    }

    pub fn with_llm_params(mut self, params: LlmParams) -> Self {
        self.llm_params = Field::Value(Loose::Typed(params));
        self
    }

    pub fn with_rerank_params(mut self, params: RerankParams) -> Self {
        self.rerank_params = Field::Value(Loose::Typed(params));
        self
    }
}

impl Model for QueryRequest {
    const NAME: &'static str = "QueryRequest";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for NodeMetadata {
    const NAME: &'static str = "NodeMetadata";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// A retrieved chunk with its relevance score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeWithScore {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub doc_id: String,
    pub node_id: String,
    pub text: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub metadata: Field<Loose<NodeMetadata>>,
}

impl Model for NodeWithScore {
    const NAME: &'static str = "NodeWithScore";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResponseMetadata {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for QueryResponseMetadata {
    const NAME: &'static str = "QueryResponseMetadata";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Answer of `POST /query`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub response: String,
    pub source_nodes: Vec<NodeWithScore>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub metadata: Field<Loose<QueryResponseMetadata>>,
}

impl QueryResponse {
    /// Source nodes ordered from most to least relevant.
    pub fn ranked_nodes(&self) -> Vec<&NodeWithScore> {
        let mut nodes: Vec<&NodeWithScore> = self.source_nodes.iter().collect();
        nodes.sort_by(|a, b| b.score.total_cmp(&a.score));
        nodes
    }
}

impl Model for QueryResponse {
    const NAME: &'static str = "QueryResponse";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}
