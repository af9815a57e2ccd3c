use crate::client::core::Client;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::env;
use std::time::Duration;
use url::Url;

/// Builder for [`Client`].
///
/// Keep this surface area small: a base URL, the unexpected-status policy,
/// optional auth and headers, and optionally pre-built HTTP clients.
pub struct ClientBuilder {
    base_url: Option<String>,
    raise_on_unexpected_status: bool,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    token: Option<String>,
    token_prefix: String,
    auth_header_name: String,
    http_client: Option<reqwest::Client>,
    blocking_http_client: Option<reqwest::blocking::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            raise_on_unexpected_status: false,
            timeout: None,
            headers: Vec::new(),
            token: None,
            token_prefix: "Bearer".to_string(),
            auth_header_name: "Authorization".to_string(),
            http_client: None,
            blocking_http_client: None,
        }
    }

    /// Defaults read from the environment:
    /// - `RAG_ENGINE_BASE_URL`
    /// - `RAG_ENGINE_TOKEN`
    /// - `RAG_ENGINE_TIMEOUT_SECS`
    /// - `RAG_ENGINE_RAISE_ON_UNEXPECTED_STATUS` (`1`/`true`)
    ///
    /// Explicit setters called afterwards win.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(url) = env::var("RAG_ENGINE_BASE_URL") {
            builder.base_url = Some(url);
        }
        if let Ok(token) = env::var("RAG_ENGINE_TOKEN") {
            if !token.is_empty() {
                builder.token = Some(token);
            }
        }
        builder.timeout = env::var("RAG_ENGINE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);
        builder.raise_on_unexpected_status = matches!(
            env::var("RAG_ENGINE_RAISE_ON_UNEXPECTED_STATUS").ok().as_deref(),
            Some("1") | Some("true")
        );
        builder
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Raise [`Error::UnexpectedStatus`] for undocumented status codes
    /// instead of returning an unparsed response. Off by default.
    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    /// Request timeout of the lazily-built HTTP clients. Ignored for
    /// injected clients, which carry their own.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Send `<prefix> <token>` in the auth header on every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Prefix placed before the token (default `Bearer`); empty sends the
    /// bare token.
    pub fn token_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.token_prefix = prefix.into();
        self
    }

    pub fn auth_header_name(mut self, name: impl Into<String>) -> Self {
        self.auth_header_name = name.into();
        self
    }

    /// Use a pre-configured async client (pooling, proxies, TLS, timeouts).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a pre-configured blocking client.
    pub fn blocking_http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.blocking_http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<Client> {
        let raw_url = self.base_url.ok_or_else(|| {
            Error::configuration_with_context(
                "base URL must be specified",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("client_builder"),
            )
        })?;
        let base_url = Url::parse(&raw_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_url.clone())
                    .with_source("client_builder"),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "base URL cannot carry a path",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_url),
            ));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }
        if let Some(token) = &self.token {
            let value = if self.token_prefix.is_empty() {
                token.clone()
            } else {
                format!("{} {}", self.token_prefix, token)
            };
            let (name, mut value) = header_pair(&self.auth_header_name, &value)?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let mut transport = HttpTransport::new(base_url, headers, self.timeout);
        if let Some(client) = self.http_client {
            transport = transport.with_async_client(client);
        }
        if let Some(client) = self.blocking_http_client {
            transport = transport.with_blocking_client(client);
        }
        Ok(Client::from_parts(
            transport,
            self.raise_on_unexpected_status,
        ))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid header name: {}", e),
            ErrorContext::new().with_field_path(format!("headers.{}", name)),
        )
    })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid header value: {}", e),
            ErrorContext::new().with_field_path(format!("headers.{}", name)),
        )
    })?;
    Ok((header_name, header_value))
}
