//! Typed results of an operation call.

use crate::models::HttpValidationError;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// What a documented status code parsed into.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// `200` with the operation's success schema.
    Success(T),
    /// `422` with field-level messages from the server.
    ValidationError(HttpValidationError),
}

impl<T> Parsed<T> {
    pub fn success(&self) -> Option<&T> {
        match self {
            Parsed::Success(t) => Some(t),
            Parsed::ValidationError(_) => None,
        }
    }

    pub fn validation_error(&self) -> Option<&HttpValidationError> {
        match self {
            Parsed::Success(_) => None,
            Parsed::ValidationError(e) => Some(e),
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Parsed::Success(t) => Some(t),
            Parsed::ValidationError(_) => None,
        }
    }

    /// Turn a `422` into [`crate::Error::Validation`].
    pub fn into_result(self) -> crate::Result<T> {
        match self {
            Parsed::Success(t) => Ok(t),
            Parsed::ValidationError(e) => Err(crate::Error::Validation(e)),
        }
    }
}

/// Full response of one call: raw parts plus the parsed body.
///
/// `parsed` is `None` for an undocumented status when the client is not
/// configured to raise on it.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub content: Bytes,
    pub headers: HeaderMap,
    pub parsed: Option<Parsed<T>>,
}

impl<T> Response<T> {
    pub fn is_success(&self) -> bool {
        matches!(self.parsed, Some(Parsed::Success(_)))
    }

    pub fn into_parsed(self) -> Option<Parsed<T>> {
        self.parsed
    }

    /// The success value, or an error describing why there is none.
    pub fn into_result(self) -> crate::Result<T> {
        match self.parsed {
            Some(parsed) => parsed.into_result(),
            None => Err(crate::Error::UnexpectedStatus {
                status: self.status.as_u16(),
                content: self.content,
            }),
        }
    }
}
