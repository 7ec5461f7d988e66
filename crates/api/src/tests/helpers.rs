// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.
//!
//! The stub backend is an axum router served on an ephemeral local port.
//! It answers reads with fixed rows shaped like the real backend's and
//! records every mutation it receives.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State as AxumState};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::endpoints::CSRF_HEADER;

/// A mutation as received by the stub.
#[derive(Debug, Clone)]
pub struct RecordedPost {
    pub path: String,
    pub csrf_token: Option<String>,
    pub body: Value,
}

/// Shared state for the stub router.
#[derive(Clone, Default)]
pub struct StubState {
    pub posts: Arc<Mutex<Vec<RecordedPost>>>,
    pub queries: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

async fn handle_periods(
    AxumState(state): AxumState<StubState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state
        .queries
        .lock()
        .await
        .push((String::from("periods"), query));
    let periods: Value = json!([
        {"id": 1, "period_number": 1, "period_name": "Registration", "start_time": "08:00",
         "end_time": "08:45", "duration_minutes": 45, "level_id": null, "section_id": null,
         "day_of_week": null},
        {"id": 2, "period_number": 2, "period_name": null, "start_time": "08:50",
         "end_time": "09:35", "duration_minutes": 45, "level_id": null, "section_id": null,
         "day_of_week": 1}
    ]);
    Json(json!({"success": true, "periods": periods, "data": periods}))
}

async fn handle_staff_assignments(Path(staff_id): Path<i64>) -> Json<Value> {
    let timetable: Value = json!([
        {"id": 10, "day_of_week": 1, "period_number": 2, "period_name": null,
         "start_time": "08:50", "end_time": "09:35",
         "class_subject": "Grade 7 - A - Mathematics", "room_number": "B12",
         "is_locked": false, "type": "assigned"},
        {"id": 11, "day_of_week": 3, "period_number": 1, "period_name": "Registration",
         "start_time": "08:00", "end_time": "08:45",
         "class_subject": format!("Level {staff_id} - Section 1 - Form time"),
         "room_number": null, "is_locked": true, "type": "assigned"}
    ]);
    Json(json!({"success": true, "timetable": timetable, "data": timetable}))
}

async fn handle_all_assignments(
    AxumState(state): AxumState<StubState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state
        .queries
        .lock()
        .await
        .push((String::from("assignments/all"), query));
    Json(json!({"success": true, "data": [
        {"id": 10, "staff_id": 1, "day_of_week": 1, "period_number": 2,
         "class_subject": "Grade 7 - A - Mathematics", "is_locked": false,
         "full_name": "Asha", "department": "Maths"},
        {"id": 12, "staff_id": 2, "day_of_week": 1, "period_number": 3,
         "class_subject": "Grade 7 - A - Biology", "is_locked": true,
         "full_name": "Bala", "department": "Science"}
    ]}))
}

async fn handle_allocations(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let staff_id: i64 = query
        .get("staff_id")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let allocations: Value = json!([
        {"id": 20, "staff_id": staff_id, "school_id": 1, "day_of_week": 2,
         "period_number": 1, "period_name": "Registration", "start_time": "08:00",
         "end_time": "08:45", "class_subject": "Library duty", "is_admin_locked": true}
    ]);
    Json(json!({"success": true, "allocations": allocations, "data": allocations}))
}

async fn handle_requests() -> Json<Value> {
    let row: Value = json!({
        "id": 7, "requester_id": 1, "requester_name": "Asha", "requester_dept": "Maths",
        "assignment_id": 10, "period_name": null, "period_number": 2, "day_of_week": 1,
        "start_time": "08:50", "end_time": "09:35",
        "class_subject": "Grade 7 - A - Mathematics", "reason": "Training",
        "status": "pending", "created_at": "2026-03-02 09:00:00"
    });
    // The real listing repeats a request once per matching period template.
    Json(json!({"success": true, "requests": [row.clone(), row]}))
}

async fn handle_departments() -> Json<Value> {
    Json(json!({"success": true, "departments": [
        {"department": "Maths", "allow_alterations": true, "allow_inbound": true},
        {"department": "Science", "allow_alterations": false, "allow_inbound": true}
    ]}))
}

async fn handle_staff_list() -> Json<Value> {
    Json(json!({"success": true, "staff": [
        {"id": 1, "staff_id": "T001", "full_name": "Asha", "department": "Maths"},
        {"id": 2, "staff_id": "T002", "full_name": "Bala", "department": null}
    ]}))
}

async fn handle_mutation(
    AxumState(state): AxumState<StubState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let csrf_token: Option<String> = headers
        .get(CSRF_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.posts.lock().await.push(RecordedPost {
        path: uri.path().to_string(),
        csrf_token,
        body,
    });
    (StatusCode::OK, Json(json!({"success": true, "message": "ok"})))
}

async fn handle_locked_delete(AxumState(state): AxumState<StubState>) -> (StatusCode, Json<Value>) {
    state.posts.lock().await.push(RecordedPost {
        path: String::from("/api/timetable/allocation/delete"),
        csrf_token: None,
        body: Value::Null,
    });
    (
        StatusCode::FORBIDDEN,
        Json(json!({"success": false, "error": "Cannot delete admin-locked allocation"})),
    )
}

/// Builds the stub router.
pub fn build_stub_router(state: StubState) -> Router {
    Router::new()
        .route("/api/timetable/periods", get(handle_periods))
        .route("/api/timetable/assignments/all", get(handle_all_assignments))
        .route(
            "/api/timetable/assignments/{staff_id}",
            get(handle_staff_assignments),
        )
        .route("/api/timetable/allocations", get(handle_allocations))
        .route("/api/timetable/requests", get(handle_requests))
        .route("/api/timetable/departments", get(handle_departments))
        .route("/api/timetable/staff/list", get(handle_staff_list))
        .route("/api/timetable/swap/request", post(handle_mutation))
        .route("/api/timetable/swap/respond", post(handle_mutation))
        .route("/api/timetable/allocation/save", post(handle_mutation))
        .route("/api/timetable/allocation/update", post(handle_mutation))
        .route("/api/timetable/allocation/delete", post(handle_locked_delete))
        .route("/api/timetable/department/permission", post(handle_mutation))
        .route("/api/timetable/assignment/override", post(handle_mutation))
        .with_state(state)
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts the stub backend and returns its base URL and shared state.
pub async fn start_stub_backend() -> (String, StubState) {
    let state: StubState = StubState::default();
    let base_url: String = serve(build_stub_router(state.clone())).await;
    (base_url, state)
}
