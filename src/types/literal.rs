//! Fields pinned to a single constant string.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A constant string value, e.g. the `"assistant"` role or the
/// `"chat.completion"` object tag.
pub trait LiteralValue {
    const VALUE: &'static str;
}

/// A zero-sized field that always serializes to `L::VALUE` and refuses to
/// parse anything else.
pub struct Literal<L>(PhantomData<L>);

impl<L: LiteralValue> Literal<L> {
    pub fn new() -> Self {
        Literal(PhantomData)
    }

    pub fn as_str(&self) -> &'static str {
        L::VALUE
    }
}

// Manual impls: derives would put bounds on `L`, which is only a marker.
impl<L: LiteralValue> Default for Literal<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Clone for Literal<L> {
    fn clone(&self) -> Self {
        Literal(PhantomData)
    }
}

impl<L> Copy for Literal<L> {}

impl<L> PartialEq for Literal<L> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<L> Eq for Literal<L> {}

impl<L: LiteralValue> fmt::Debug for Literal<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", L::VALUE)
    }
}

impl<L: LiteralValue> fmt::Display for Literal<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(L::VALUE)
    }
}

impl<L: LiteralValue> Serialize for Literal<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(L::VALUE)
    }
}

impl<'de, L: LiteralValue> Deserialize<'de> for Literal<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let got = String::deserialize(deserializer)?;
        if got == L::VALUE {
            Ok(Literal::new())
        } else {
            Err(de::Error::custom(format!(
                "must match const '{}', got '{}'",
                L::VALUE,
                got
            )))
        }
    }
}

/// `role` of an assistant message.
#[derive(Debug, Clone, Copy)]
pub enum Assistant {}

impl LiteralValue for Assistant {
    const VALUE: &'static str = "assistant";
}

/// `object` tag of a chat completion.
#[derive(Debug, Clone, Copy)]
pub enum ChatCompletionObject {}

impl LiteralValue for ChatCompletionObject {
    const VALUE: &'static str = "chat.completion";
}

/// `type` of a tool call.
#[derive(Debug, Clone, Copy)]
pub enum FunctionType {}

impl LiteralValue for FunctionType {
    const VALUE: &'static str = "function";
}

/// `type` of a message annotation.
#[derive(Debug, Clone, Copy)]
pub enum UrlCitationType {}

impl LiteralValue for UrlCitationType {
    const VALUE: &'static str = "url_citation";
}
