//! Error taxonomy for the poll API client.
//!
//! # Design
//! Every way a call can fail gets its own variant, split along one axis
//! that callers care about: did the server answer at all? `Rejected` and
//! `InvalidBody` carry the received status code; the transport variants
//! carry none, because no response ever arrived. `status_code` encodes
//! that rule in one place so `Outcome` never has to guess.
//!
//! `Display` for `Rejected` and `InvalidBody` prints only the message,
//! not the status. The status travels separately in the `Outcome`, and
//! callers surface messages like "username already registered" verbatim.

use std::fmt;

/// Errors produced while building, executing or normalizing a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a status outside the accepted set.
    /// `message` is the JSON `detail` field when the body provides one,
    /// otherwise synthesized from the status and raw body.
    Rejected { status: u16, message: String },

    /// The server answered with an accepted status but the body failed a
    /// local shape check (not JSON, or polls not returned as an array).
    InvalidBody { status: u16, message: String },

    /// A connection to the server could not be established.
    Unreachable,

    /// The server did not respond within the timeout window.
    TimedOut,

    /// Any other network-level failure.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl ApiError {
    /// The HTTP status code, if a response was received.
    ///
    /// `None` exactly for transport-level failures, so an `Outcome` built
    /// from this error satisfies the status-null-iff-transport invariant.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::InvalidBody { status, .. } => {
                Some(*status)
            }
            ApiError::Unreachable
            | ApiError::TimedOut
            | ApiError::Transport(_)
            | ApiError::Serialization(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected { message, .. } => write!(f, "{message}"),
            ApiError::InvalidBody { message, .. } => write!(f, "{message}"),
            ApiError::Unreachable => {
                write!(f, "could not connect to the server; make sure it is running")
            }
            ApiError::TimedOut => {
                write!(f, "request timed out; the server might be slow to respond")
            }
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "failed to serialize request body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
