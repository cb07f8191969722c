//! HTTP request and response values as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and normalizes `HttpResponse`
//! values without touching the network; the `transport` module executes the
//! actual round-trip. Keeping both sides as plain data makes request
//! construction and response handling testable with fabricated values.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between the builder, the transport and tests.

/// HTTP method for a request. The poll API only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `PollyClient::build_*` methods and executed by
/// `transport::execute`. Query parameters are already encoded into `url`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by `transport::execute` (or fabricated in tests), then passed
/// to `PollyClient::parse_*` methods for normalization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
