//! Chat completion response: choices, assistant message and usage.

use super::logprobs::ChoiceLogprobs;
use super::query::NodeWithScore;
use crate::types::literal::{Assistant, ChatCompletionObject, FunctionType, UrlCitationType};
use crate::types::{AdditionalProperties, Field, Literal, Loose, Model};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Auto,
    Default,
    Flex,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub name: String,
    /// JSON-encoded arguments as produced by the model; may be invalid JSON.
    pub arguments: String,
}

impl FunctionCall {
    pub fn parse_arguments(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.arguments)
    }
}

impl Model for FunctionCall {
    const NAME: &'static str = "FunctionCall";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatCompletionMessageToolCall {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: Literal<FunctionType>,
    pub function: FunctionCall,
}

impl Model for ChatCompletionMessageToolCall {
    const NAME: &'static str = "ChatCompletionMessageToolCall";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UrlCitation {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub end_index: i64,
    pub start_index: i64,
    pub title: String,
    pub url: String,
}

impl Model for UrlCitation {
    const NAME: &'static str = "AnnotationURLCitation";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    #[serde(rename = "type")]
    pub annotation_type: Literal<UrlCitationType>,
    pub url_citation: UrlCitation,
}

impl Model for Annotation {
    const NAME: &'static str = "Annotation";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatCompletionAudio {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub id: String,
    /// Base64 encoded audio bytes.
    pub data: String,
    pub expires_at: i64,
    pub transcript: String,
}

impl Model for ChatCompletionAudio {
    const NAME: &'static str = "ChatCompletionAudio";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// The assistant message of a choice. `role` must be `"assistant"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub role: Literal<Assistant>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub content: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub refusal: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub annotations: Field<Loose<Vec<Annotation>>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub audio: Field<Loose<ChatCompletionAudio>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub function_call: Field<Loose<FunctionCall>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tool_calls: Field<Loose<Vec<ChatCompletionMessageToolCall>>>,
}

impl ChatCompletionMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Field::Value(content.into()),
            ..Default::default()
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.value().map(String::as_str)
    }

    pub fn tool_calls(&self) -> &[ChatCompletionMessageToolCall] {
        self.tool_calls
            .value()
            .and_then(Loose::typed)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Model for ChatCompletionMessage {
    const NAME: &'static str = "ChatCompletionMessage";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub finish_reason: String,
    pub index: i64,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub logprobs: Field<Loose<ChoiceLogprobs>>,
    pub message: ChatCompletionMessage,
}

impl Model for Choice {
    const NAME: &'static str = "Choice";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionUsage {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub completion_tokens: i64,
    pub prompt_tokens: i64,
    pub total_tokens: i64,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub completion_tokens_details: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub prompt_tokens_details: Field<Value>,
}

impl Model for CompletionUsage {
    const NAME: &'static str = "CompletionUsage";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Answer of `POST /v1/chat/completions`. RAG-augmented answers also carry
/// the retrieved `source_nodes`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub id: String,
    pub choices: Vec<Choice>,
    pub created: i64,
    pub model: String,
    pub object: Literal<ChatCompletionObject>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub service_tier: Field<Loose<ServiceTier>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub system_fingerprint: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub usage: Field<Loose<CompletionUsage>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub source_nodes: Field<Loose<Vec<NodeWithScore>>>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, the usual single-answer case.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content())
    }

    pub fn usage(&self) -> Option<&CompletionUsage> {
        self.usage.value().and_then(Loose::typed)
    }

    pub fn source_nodes(&self) -> &[NodeWithScore] {
        self.source_nodes
            .value()
            .and_then(Loose::typed)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Model for ChatCompletionResponse {
    const NAME: &'static str = "ChatCompletionResponse";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}
