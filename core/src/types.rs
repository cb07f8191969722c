//! Request payloads and pagination types for the poll API.
//!
//! # Design
//! The registration payload is the only typed DTO the client sends. Poll
//! records stay opaque (`serde_json::Value`): the server's contract for
//! listing is validated only as "the body is a JSON array", and the
//! registration body is not shape-checked at all. The mock-server crate
//! defines its own typed schema; integration tests catch drift between
//! the two.

use serde::Serialize;
use serde_json::Value;

/// Request payload for `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Pagination window for `GET /polls`. Defaults match the server's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

/// Echo of the requested window plus the count actually returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
    pub returned_count: usize,
}

/// Successful result of a poll listing: the raw poll records and the
/// pagination echo.
#[derive(Debug, Clone, PartialEq)]
pub struct PollPage {
    pub polls: Vec<Value>,
    pub pagination: Pagination,
}
