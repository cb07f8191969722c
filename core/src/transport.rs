//! Blocking HTTP executor for `HttpRequest` values.
//!
//! # Design
//! Each call builds a fresh ureq agent, so no connection or cookie state
//! survives between façade calls. ureq's status-as-error behavior is
//! disabled: 4xx/5xx responses come back as data and status
//! interpretation stays in the client's parse methods. Only failures
//! where no response was received surface as `Err` here, classified into
//! the transport variants of `ApiError`.

use std::io::ErrorKind;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Execute a request and return the response, whatever its status.
///
/// `timeout` bounds the whole call, connect included.
pub fn execute(req: &HttpRequest, timeout: Duration) -> Result<HttpResponse, ApiError> {
    debug!(method = ?req.method, url = %req.url, "dispatching request");

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent();

    let result = match (req.method, req.body.as_deref()) {
        (HttpMethod::Get, _) => {
            let mut builder = agent.get(&req.url);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.call()
        }
        (HttpMethod::Post, Some(body)) => {
            let mut builder = agent.post(&req.url);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.send(body.as_bytes())
        }
        (HttpMethod::Post, None) => {
            let mut builder = agent.post(&req.url);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.send_empty()
        }
    };

    let mut response = result.map_err(|e| {
        let err = classify(e);
        warn!(url = %req.url, error = %err, "transport failure");
        err
    })?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    // A timeout can also fire while streaming the body; classify it the
    // same way as one that fired before the response arrived.
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(classify)?;

    debug!(status, "response received");
    Ok(HttpResponse { status, headers, body })
}

/// Map a ureq error onto the transport variants of `ApiError`.
fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(_) => ApiError::TimedOut,
        ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => ApiError::Unreachable,
        ureq::Error::Io(io) => classify_io(io),
        other => ApiError::Transport(other.to_string()),
    }
}

/// Connection-establishment failures often surface as plain io errors;
/// sort them by kind.
fn classify_io(err: std::io::Error) -> ApiError {
    match err.kind() {
        ErrorKind::ConnectionRefused
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::NotConnected => ApiError::Unreachable,
        ErrorKind::TimedOut | ErrorKind::WouldBlock => ApiError::TimedOut,
        _ => ApiError::Transport(err.to_string()),
    }
}
