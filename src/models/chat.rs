//! OpenAI-compatible chat completion request, optionally RAG-augmented.

use crate::types::{AdditionalProperties, Field, Model};
use serde::{Deserialize, Serialize};

/// One message of the conversation sent to `/v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatRequestMessage {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub role: String,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub content: Field<String>,
}

impl ChatRequestMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            role: role.into(),
            content: Field::Value(content.into()),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

impl Model for ChatRequestMessage {
    const NAME: &'static str = "ChatRequestMessage";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Body of `POST /v1/chat/completions`.
///
/// Setting `index_name` makes the engine retrieve context from that index
/// before calling the model; without it the request goes to the base model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub model: Field<String>,
    pub messages: Vec<ChatRequestMessage>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub index_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub temperature: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub top_p: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub max_tokens: Field<i64>,
    /// Share of the context window reserved for retrieved nodes.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub context_token_ratio: Field<f64>,
}

impl ChatCompletionRequest {
    pub fn new(messages: Vec<ChatRequestMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Field::Value(model.into());
        self
    }

    pub fn with_index(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Field::Value(index_name.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Field::Value(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Field::Value(top_p);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = Field::Value(max_tokens);
        self
    }

    pub fn with_context_token_ratio(mut self, ratio: f64) -> Self {
        self.context_token_ratio = Field::Value(ratio);
        self
    }
}

impl Model for ChatCompletionRequest {
    const NAME: &'static str = "ChatCompletionRequest";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}
