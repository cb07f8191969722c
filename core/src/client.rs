//! Client façade for the poll-management API.
//!
//! # Design
//! `PollyClient` holds only a base URL and a timeout; no state survives a
//! call. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`,
//! so construction and normalization are testable without a network. The
//! public `register_user` / `get_polls` methods compose build, execute
//! and parse, and fold every `ApiError` into an `Outcome` so no error
//! ever crosses the façade boundary.

use std::time::Duration;

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::outcome::Outcome;
use crate::transport;
use crate::types::{Page, Pagination, PollPage, RegisterRequest};

/// Base URL used by `PollyClient::default`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Timeout applied to every call, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Synchronous, stateless client for the poll API.
#[derive(Debug, Clone)]
pub struct PollyClient {
    base_url: String,
    timeout: Duration,
}

impl Default for PollyClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PollyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the default 30 second timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Register a new user via `POST /register`.
    ///
    /// The success payload is the server's JSON body, unvalidated; the
    /// registration endpoint has no client-side shape contract.
    pub fn register_user(&self, username: &str, password: &str) -> Outcome<Value> {
        let req = match self.build_register_user(username, password) {
            Ok(req) => req,
            Err(err) => return Outcome::from_error(err),
        };
        match transport::execute(&req, self.timeout) {
            Ok(response) => {
                let status = response.status;
                match self.parse_register_response(response) {
                    Ok(data) => Outcome::Success { data, status },
                    Err(err) => Outcome::from_error(err),
                }
            }
            Err(err) => Outcome::from_error(err),
        }
    }

    /// Fetch a page of polls via `GET /polls?skip&limit`.
    pub fn get_polls(&self, page: Page) -> Outcome<PollPage> {
        let req = self.build_get_polls(page);
        match transport::execute(&req, self.timeout) {
            Ok(response) => {
                let status = response.status;
                match self.parse_polls_response(response, page) {
                    Ok(data) => Outcome::Success { data, status },
                    Err(err) => Outcome::from_error(err),
                }
            }
            Err(err) => Outcome::from_error(err),
        }
    }

    pub fn build_register_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<HttpRequest, ApiError> {
        let payload = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/register", self.base_url),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }

    pub fn build_get_polls(&self, page: Page) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!(
                "{}/polls?skip={}&limit={}",
                self.base_url, page.skip, page.limit
            ),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// Normalize a registration response. 200 and 201 both count as
    /// accepted; the body is returned as opaque JSON.
    pub fn parse_register_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if response.status != 200 && response.status != 201 {
            return Err(rejection(&response));
        }
        serde_json::from_str(&response.body).map_err(|_| ApiError::InvalidBody {
            status: response.status,
            message: "invalid response format: body is not valid JSON".to_string(),
        })
    }

    /// Normalize a poll-listing response. Only 200 counts as accepted,
    /// and the body must be a JSON array.
    pub fn parse_polls_response(
        &self,
        response: HttpResponse,
        page: Page,
    ) -> Result<PollPage, ApiError> {
        if response.status != 200 {
            return Err(rejection(&response));
        }
        let parsed: Value = serde_json::from_str(&response.body).map_err(|_| {
            ApiError::InvalidBody {
                status: response.status,
                message: "invalid response format: body is not valid JSON".to_string(),
            }
        })?;
        let Value::Array(polls) = parsed else {
            return Err(ApiError::InvalidBody {
                status: response.status,
                message: "invalid response format: expected list of polls".to_string(),
            });
        };
        let pagination = Pagination {
            skip: page.skip,
            limit: page.limit,
            returned_count: polls.len(),
        };
        Ok(PollPage { polls, pagination })
    }
}

/// Build a `Rejected` error for a non-accepted status. The message is the
/// body's `detail` field when present, else `HTTP {status}` for JSON
/// bodies without one, else `HTTP {status}: {body}` for non-JSON bodies.
fn rejection(response: &HttpResponse) -> ApiError {
    let message = match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => match body.get("detail") {
            Some(detail) => detail
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| detail.to_string()),
            None => format!("HTTP {}", response.status),
        },
        Err(_) => format!("HTTP {}: {}", response.status, response.body),
    };
    ApiError::Rejected {
        status: response.status,
        message,
    }
}
