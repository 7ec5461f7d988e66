// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `{success, data, error}` response envelope.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response to a mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Whether the backend applied the change.
    pub success: bool,
    /// Why the backend refused, when it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Informational text on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    /// A successful response.
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            error: None,
            message: Some(message.to_string()),
        }
    }

    /// A refusal carrying the backend's message.
    #[must_use]
    pub fn rejected(error: &str) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            message: None,
        }
    }

    /// Converts the envelope into a result.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` when `success` is false.
    pub fn into_result(self, status: Option<u16>) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        Err(ApiError::Rejected {
            status,
            message: self
                .error
                .unwrap_or_else(|| String::from("request was not applied")),
        })
    }
}

/// Extracts the rows of a list response.
///
/// Rows are read from `data`, falling back to the endpoint's own key
/// (`periods`, `requests`, `departments`, `staff`) for endpoints that only
/// populate that one.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when `success` is false, and
/// `ApiError::Decode` when the body or a row is malformed.
pub fn list_rows<T: DeserializeOwned>(
    body: Value,
    key: &str,
    status: Option<u16>,
) -> Result<Vec<T>, ApiError> {
    let Value::Object(mut fields) = body else {
        return Err(ApiError::Decode(String::from(
            "expected a JSON object envelope",
        )));
    };

    let success: bool = fields
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !success {
        let message: String = fields
            .get("error")
            .and_then(Value::as_str)
            .map_or_else(|| String::from("request failed"), str::to_string);
        return Err(ApiError::Rejected { status, message });
    }

    let rows: Value = match fields.remove("data") {
        Some(rows) if !rows.is_null() => rows,
        _ => fields.remove(key).unwrap_or(Value::Array(Vec::new())),
    };
    Ok(serde_json::from_value(rows)?)
}
