use super::{model_body, parse_model, Endpoint, PathSegment};
use crate::error::SchemaError;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::Result;
use reqwest::Method;
use serde_json::Value;

/// `POST /v1/chat/completions`
#[derive(Debug, Clone)]
pub struct ChatCompletions {
    pub body: ChatCompletionRequest,
}

impl ChatCompletions {
    pub fn new(body: ChatCompletionRequest) -> Self {
        Self { body }
    }
}

impl Endpoint for ChatCompletions {
    type Output = ChatCompletionResponse;
    const OPERATION: &'static str = "chat_completions";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<PathSegment<'_>> {
        vec![
            PathSegment::Literal("v1"),
            PathSegment::Literal("chat"),
            PathSegment::Literal("completions"),
        ]
    }

    fn body(&self) -> std::result::Result<Option<Value>, SchemaError> {
        model_body(&self.body)
    }

    fn parse_success(&self, body: &[u8]) -> Result<ChatCompletionResponse> {
        parse_model(body)
    }
}
