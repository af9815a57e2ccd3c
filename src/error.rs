use crate::models::HttpValidationError;
use bytes::Bytes;
use thiserror::Error;

/// Structured error context for configuration and transport failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "base_url", "documents[0].text")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder", "from_env")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A payload did not match the declared shape of a model.
///
/// Raised for a missing required field, a literal/discriminator mismatch or a
/// top-level value that is not a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SchemaError {
    pub message: String,
    /// Name of the offending field when it can be determined.
    pub field: Option<String>,
}

impl SchemaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn missing_field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            message: format!("missing required field `{}`", name),
            field: Some(name),
        }
    }

    pub fn not_an_object(model: &str) -> Self {
        Self::new(format!("expected a JSON object for `{}`", model))
    }

    /// Translate a serde failure into a schema error, keeping the field name
    /// for the `missing field` case so callers can match on it.
    pub(crate) fn from_serde(model: &str, err: &serde_json::Error) -> Self {
        let text = err.to_string();
        if let Some(rest) = text.strip_prefix("missing field `") {
            if let Some(end) = rest.find('`') {
                let name = &rest[..end];
                return Self {
                    message: format!(
                        "missing required field `{}` while parsing `{}`",
                        name, model
                    ),
                    field: Some(name.to_string()),
                };
            }
        }
        Self::new(format!("invalid `{}`: {}", model, text))
    }
}

/// Unified error type for the RAG Engine client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Unexpected status code: {status}")]
    UnexpectedStatus { status: u16, content: Bytes },

    #[error("Validation error: {}", .0.summary())]
    Validation(HttpValidationError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Validation(_) => Some(422),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body of an unexpected status, lossily decoded.
    pub fn body_text(&self) -> Option<String> {
        match self {
            Error::UnexpectedStatus { content, .. } => {
                Some(String::from_utf8_lossy(content).into_owned())
            }
            _ => None,
        }
    }
}
