//! The uniform result shape returned by every façade operation.
//!
//! # Design
//! A tagged variant instead of a loosely-typed record: `Success` always
//! carries data and the received status, `Failure` always carries a
//! message and maybe a status. The enum shape makes "exactly one of
//! data/error" a compile-time fact, and `match` forces callers to handle
//! both arms. Nothing is thrown across the façade boundary; callers that
//! want exceptions can convert with `into_result`.

use crate::error::ApiError;

/// Result of a façade call. `status` in `Failure` is `None` exactly when
/// the failure was transport-level and no HTTP response was received.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success { data: T, status: u16 },
    Failure { error: String, status: Option<u16> },
}

impl<T> Outcome<T> {
    /// Build a `Failure` from an `ApiError`, taking the human-readable
    /// message from `Display` and the status from `ApiError::status_code`.
    pub fn from_error(err: ApiError) -> Self {
        Outcome::Failure {
            status: err.status_code(),
            error: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The HTTP status code, if any response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Outcome::Success { status, .. } => Some(*status),
            Outcome::Failure { status, .. } => *status,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    /// Convert into a plain `Result`, discarding the status codes.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success { data, .. } => Ok(data),
            Outcome::Failure { error, .. } => Err(error),
        }
    }
}

impl<T> From<ApiError> for Outcome<T> {
    fn from(err: ApiError) -> Self {
        Outcome::from_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_data_and_status() {
        let outcome: Outcome<u32> = Outcome::Success { data: 7, status: 200 };
        assert!(outcome.is_success());
        assert_eq!(outcome.data(), Some(&7));
        assert_eq!(outcome.error(), None);
        assert_eq!(outcome.status_code(), Some(200));
    }

    #[test]
    fn failure_from_rejection_keeps_status() {
        let outcome: Outcome<u32> = Outcome::from_error(ApiError::Rejected {
            status: 400,
            message: "username already registered".to_string(),
        });
        assert!(!outcome.is_success());
        assert_eq!(outcome.status_code(), Some(400));
        assert_eq!(outcome.error(), Some("username already registered"));
        assert_eq!(outcome.data(), None);
    }

    #[test]
    fn failure_from_transport_error_has_no_status() {
        let outcome: Outcome<u32> = Outcome::from_error(ApiError::TimedOut);
        assert_eq!(outcome.status_code(), None);
        assert!(outcome.error().is_some_and(|e| e.contains("timed out")));
    }

    #[test]
    fn into_result_maps_both_arms() {
        let ok: Outcome<u32> = Outcome::Success { data: 1, status: 201 };
        assert_eq!(ok.into_result(), Ok(1));

        let err: Outcome<u32> = Outcome::from_error(ApiError::Unreachable);
        assert!(err.into_result().is_err());
    }
}
