//! Synchronous client façade for the poll-management API.
//!
//! # Overview
//! Two operations: register a user (`POST /register`) and list polls with
//! pagination (`GET /polls?skip&limit`). Every outcome, whether success,
//! HTTP rejection, connection failure, timeout or malformed body, is
//! normalized into one uniform [`Outcome`] value; nothing is ever raised
//! across the façade boundary.
//!
//! # Design
//! - `PollyClient` is stateless: it holds only a base URL and a timeout,
//!   and each call builds a fresh agent.
//! - Each operation is split into `build_*` (produces a plain-data
//!   request) and `parse_*` (consumes a plain-data response), so the I/O
//!   boundary is explicit and both halves are testable without a network.
//! - The `transport` module executes requests with ureq, blocking, and
//!   classifies failures where no response arrived.
//! - `Outcome::Failure` carries a status code exactly when an HTTP
//!   response was received; transport-level failures carry `None`.

pub mod client;
pub mod error;
pub mod http;
pub mod outcome;
pub mod transport;
pub mod types;

pub use client::{PollyClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::Outcome;
pub use types::{Page, Pagination, PollPage, RegisterRequest};
