// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend endpoint paths and the mapping from calls to requests.

use crate::dto::{
    DeleteAllocationBody, OverrideAssignmentBody, SaveAllocationBody, SwapRequestBody,
    SwapResponseBody, UpdateAllocationBody,
};
use crate::error::ApiError;
use serde_json::Value;
use staff_timetable::BackendCall;
use staff_timetable_domain::StaffId;

/// Period templates.
pub const PERIODS: &str = "/api/timetable/periods";
/// Assignments of every staff member, filterable by section.
pub const ASSIGNMENTS_ALL: &str = "/api/timetable/assignments/all";
/// The acting staff member's self-allocations.
pub const ALLOCATIONS: &str = "/api/timetable/allocations";
/// Swap requests addressed to a staff member.
pub const REQUESTS: &str = "/api/timetable/requests";
/// Department permissions.
pub const DEPARTMENTS: &str = "/api/timetable/departments";
/// Staff of the school.
pub const STAFF_LIST: &str = "/api/timetable/staff/list";

/// Create a swap request.
pub const SWAP_REQUEST: &str = "/api/timetable/swap/request";
/// Respond to a swap request.
pub const SWAP_RESPOND: &str = "/api/timetable/swap/respond";
/// Create a self-allocation.
pub const ALLOCATION_SAVE: &str = "/api/timetable/allocation/save";
/// Update a self-allocation.
pub const ALLOCATION_UPDATE: &str = "/api/timetable/allocation/update";
/// Delete a self-allocation.
pub const ALLOCATION_DELETE: &str = "/api/timetable/allocation/delete";
/// Upsert a department permission.
pub const DEPARTMENT_PERMISSION: &str = "/api/timetable/department/permission";
/// Admin reassignment.
pub const ASSIGNMENT_OVERRIDE: &str = "/api/timetable/assignment/override";

/// Anti-forgery header sent with every mutating request.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// One staff member's assignments.
#[must_use]
pub fn staff_assignments(staff_id: StaffId) -> String {
    format!("/api/timetable/assignments/{staff_id}")
}

/// Returns the path and JSON body for a backend call.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body cannot be encoded.
pub fn request_for(call: &BackendCall) -> Result<(&'static str, Value), ApiError> {
    let (path, body): (&'static str, Value) = match call {
        BackendCall::CreateSwapRequest {
            assignment_id,
            target_staff_id,
            reason,
        } => (
            SWAP_REQUEST,
            serde_json::to_value(SwapRequestBody {
                assignment_id: *assignment_id,
                target_staff_id: *target_staff_id,
                reason: reason.clone(),
            })?,
        ),
        BackendCall::RespondSwapRequest {
            request_id,
            accept,
            response_reason,
        } => (
            SWAP_RESPOND,
            serde_json::to_value(SwapResponseBody {
                request_id: *request_id,
                accept: *accept,
                response_reason: response_reason.clone(),
            })?,
        ),
        BackendCall::SaveAllocation {
            day_of_week,
            period_number,
            class_subject,
        } => (
            ALLOCATION_SAVE,
            serde_json::to_value(SaveAllocationBody {
                day_of_week: *day_of_week,
                period_number: *period_number,
                class_subject: class_subject.clone(),
            })?,
        ),
        BackendCall::UpdateAllocation {
            allocation_id,
            class_subject,
        } => (
            ALLOCATION_UPDATE,
            serde_json::to_value(UpdateAllocationBody {
                allocation_id: *allocation_id,
                class_subject: class_subject.clone(),
            })?,
        ),
        BackendCall::DeleteAllocation { allocation_id } => (
            ALLOCATION_DELETE,
            serde_json::to_value(DeleteAllocationBody {
                allocation_id: *allocation_id,
            })?,
        ),
        BackendCall::UpdateDepartmentPermission(permission) => {
            (DEPARTMENT_PERMISSION, serde_json::to_value(permission)?)
        }
        BackendCall::OverrideAssignment {
            assignment_id,
            new_staff_id,
            admin_notes,
        } => (
            ASSIGNMENT_OVERRIDE,
            serde_json::to_value(OverrideAssignmentBody {
                assignment_id: *assignment_id,
                new_staff_id: *new_staff_id,
                admin_notes: admin_notes.clone(),
            })?,
        ),
    };
    Ok((path, body))
}
