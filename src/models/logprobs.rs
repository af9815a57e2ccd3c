use crate::types::{AdditionalProperties, Field, Loose, Model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopLogprob {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub token: String,
    pub logprob: f64,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub bytes: Field<Loose<Vec<i64>>>,
}

impl Model for TopLogprob {
    const NAME: &'static str = "TopLogprob";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenLogprob {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    pub token: String,
    pub logprob: f64,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub bytes: Field<Loose<Vec<i64>>>,
    pub top_logprobs: Vec<TopLogprob>,
}

impl Model for TokenLogprob {
    const NAME: &'static str = "ChatCompletionTokenLogprob";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

/// Log probabilities of a choice's content and refusal tokens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChoiceLogprobs {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub content: Field<Loose<Vec<TokenLogprob>>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub refusal: Field<Loose<Vec<TokenLogprob>>>,
}

impl Model for ChoiceLogprobs {
    const NAME: &'static str = "ChoiceLogprobs";

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}
