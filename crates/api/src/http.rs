// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! [`TimetableBackend`] over HTTP.

use std::time::Duration;

use crate::backend::TimetableBackend;
use crate::dto::{AllocationRow, AssignmentRow, SwapRequestListing, SwapRequestRow};
use crate::endpoints::{
    ALLOCATIONS, ASSIGNMENTS_ALL, CSRF_HEADER, DEPARTMENTS, PERIODS, REQUESTS, STAFF_LIST,
    request_for, staff_assignments,
};
use crate::envelope::{MutationResponse, list_rows};
use crate::error::ApiError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use staff_timetable::{BackendCall, Scope};
use staff_timetable_domain::{
    Allocation, Assignment, DepartmentPermission, Period, StaffId, StaffMember,
};

/// HTTP request timeout for a single call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to the school-management backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    csrf_token: Option<String>,
    school_id: Option<i64>,
}

impl HttpBackend {
    /// Creates a backend client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        csrf_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client: reqwest::Client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token,
            school_id: None,
        })
    }

    /// Sends `school_id` with every read, for backends without a session.
    #[must_use]
    pub const fn with_school(mut self, school_id: i64) -> Self {
        self.school_id = Some(school_id);
        self
    }

    /// The base URL requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_rows<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        mut query: Vec<(&'static str, String)>,
        key: &str,
    ) -> Result<Vec<T>, ApiError> {
        if let Some(school_id) = self.school_id {
            query.push(("school_id", school_id.to_string()));
        }
        tracing::debug!(path, "Fetching");

        let response: reqwest::Response =
            self.client.get(self.url(path)).query(&query).send().await?;
        let (status, body): (Option<u16>, Value) = read_body(response).await?;
        list_rows(body, key, status)
    }

    async fn post(&self, path: &'static str, body: &Value) -> Result<(), ApiError> {
        let mut request: reqwest::RequestBuilder = self.client.post(self.url(path)).json(body);
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        tracing::debug!(path, "Posting");

        let response: reqwest::Response = request.send().await?;
        let (status, body): (Option<u16>, Value) = read_body(response).await?;
        let envelope: MutationResponse = serde_json::from_value(body)?;
        envelope.into_result(status).inspect_err(|e| {
            tracing::warn!(path, error = %e, "Backend rejected mutation");
        })
    }
}

/// Reads a JSON body, keeping the HTTP status only when it was not a success.
///
/// The backend reports refusals as `{success: false, error}` with a 4xx or
/// 5xx status; a failing response that is not JSON becomes a refusal
/// carrying the status text.
async fn read_body(response: reqwest::Response) -> Result<(Option<u16>, Value), ApiError> {
    let status: reqwest::StatusCode = response.status();
    let failed: Option<u16> = (!status.is_success()).then_some(status.as_u16());
    match response.json::<Value>().await {
        Ok(body) => Ok((failed, body)),
        Err(_) if failed.is_some() => Err(ApiError::Rejected {
            status: failed,
            message: status.to_string(),
        }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[async_trait]
impl TimetableBackend for HttpBackend {
    async fn fetch_periods(&self, scope: Scope) -> Result<Vec<Period>, ApiError> {
        let query: Vec<(&'static str, String)> = match scope {
            Scope::Staff(_) => Vec::new(),
            Scope::Section(section_id) => vec![("section_id", section_id.to_string())],
        };
        self.get_rows(PERIODS, query, "periods").await
    }

    async fn fetch_assignments(&self, scope: Scope) -> Result<Vec<Assignment>, ApiError> {
        match scope {
            Scope::Staff(staff_id) => {
                let rows: Vec<AssignmentRow> = self
                    .get_rows(&staff_assignments(staff_id), Vec::new(), "timetable")
                    .await?;
                Ok(rows
                    .into_iter()
                    .map(|row| row.into_assignment(staff_id))
                    .collect())
            }
            Scope::Section(section_id) => {
                let rows: Vec<AssignmentRow> = self
                    .get_rows(
                        ASSIGNMENTS_ALL,
                        vec![("section_id", section_id.to_string())],
                        "data",
                    )
                    .await?;
                rows.into_iter()
                    .map(|row| match row.staff_id {
                        Some(owner) => Ok(row.into_assignment(owner)),
                        None => Err(ApiError::Decode(format!(
                            "assignment {} has no staff_id",
                            row.id
                        ))),
                    })
                    .collect()
            }
        }
    }

    async fn fetch_allocations(&self, staff_id: StaffId) -> Result<Vec<Allocation>, ApiError> {
        let rows: Vec<AllocationRow> = self
            .get_rows(
                ALLOCATIONS,
                vec![("staff_id", staff_id.to_string())],
                "allocations",
            )
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_allocation(staff_id))
            .collect())
    }

    async fn fetch_swap_requests(
        &self,
        staff_id: StaffId,
    ) -> Result<Vec<SwapRequestListing>, ApiError> {
        let rows: Vec<SwapRequestRow> = self
            .get_rows(REQUESTS, vec![("staff_id", staff_id.to_string())], "requests")
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_listing(staff_id))
            .collect())
    }

    async fn fetch_departments(&self) -> Result<Vec<DepartmentPermission>, ApiError> {
        self.get_rows(DEPARTMENTS, Vec::new(), "departments").await
    }

    async fn fetch_staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.get_rows(STAFF_LIST, Vec::new(), "staff").await
    }

    async fn send(&self, call: &BackendCall) -> Result<(), ApiError> {
        let (path, body): (&'static str, Value) = request_for(call)?;
        self.post(path, &body).await
    }
}
