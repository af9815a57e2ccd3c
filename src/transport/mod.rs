//! HTTP transport: URL construction and request dispatch over reqwest.

pub mod http;

pub use http::{build_url, HttpTransport, RawResponse};
