// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staff_timetable::CoreError;
use staff_timetable_domain::ErrorKind;
use thiserror::Error;

/// Errors surfaced by the backend contract.
///
/// Client-side rule failures arrive here through `From<CoreError>` and keep
/// their classification; everything else comes from talking to the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered `success = false`.
    #[error("Backend rejected the request: {message}")]
    Rejected {
        /// HTTP status, when the response carried one worth reporting.
        status: Option<u16>,
        /// The backend's error message.
        message: String,
    },

    /// The response body was not the expected shape.
    #[error("Could not decode backend response: {0}")]
    Decode(String),

    /// Malformed or missing input, caught before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The actor may not perform the action.
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// The action conflicts with the current data.
    #[error("State conflict: {0}")]
    StateConflict(String),
}

impl ApiError {
    /// Returns whether the failure was detected without contacting the backend.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::PolicyViolation(_) | Self::StateConflict(_)
        )
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message: String = err.to_string();
        match err.kind() {
            ErrorKind::Validation => Self::Validation(message),
            ErrorKind::PolicyViolation => Self::PolicyViolation(message),
            ErrorKind::StateConflict => Self::StateConflict(message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
