// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Rows mirror what the backend lists, which is not always the full
//! entity: personal listings omit the owner and request listings omit the
//! target. Conversions fill those from the scope the list was fetched for.

use serde::{Deserialize, Serialize};
use staff_timetable_domain::{
    Allocation, AllocationId, Assignment, AssignmentId, DayOfWeek, LevelId, PeriodNumber,
    SectionId, StaffId, SwapRequest, SwapRequestId, SwapStatus,
};

/// An assignment row as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    /// Backend identifier.
    pub id: AssignmentId,
    /// Owner; absent from personal listings.
    #[serde(default)]
    pub staff_id: Option<StaffId>,
    /// Day of the slot.
    pub day_of_week: DayOfWeek,
    /// Period of the slot.
    pub period_number: PeriodNumber,
    /// Display text.
    #[serde(default)]
    pub class_subject: String,
    /// Whether the assignment is locked against swaps.
    #[serde(default)]
    pub is_locked: bool,
    /// Optional room.
    #[serde(default)]
    pub room_number: Option<String>,
    /// Optional level.
    #[serde(default)]
    pub level_id: Option<LevelId>,
    /// Optional section.
    #[serde(default)]
    pub section_id: Option<SectionId>,
}

impl AssignmentRow {
    /// Converts the row, using `owner` when the row does not name one.
    #[must_use]
    pub fn into_assignment(self, owner: StaffId) -> Assignment {
        Assignment {
            id: self.id,
            staff_id: self.staff_id.unwrap_or(owner),
            day_of_week: self.day_of_week,
            period_number: self.period_number,
            class_subject: self.class_subject,
            is_locked: self.is_locked,
            room_number: self.room_number,
            level_id: self.level_id,
            section_id: self.section_id,
        }
    }
}

/// A self-allocation row as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Backend identifier.
    pub id: AllocationId,
    /// Owner, when the listing includes it.
    #[serde(default)]
    pub staff_id: Option<StaffId>,
    /// Day of the slot.
    pub day_of_week: DayOfWeek,
    /// Period of the slot.
    pub period_number: PeriodNumber,
    /// Display text.
    #[serde(default)]
    pub class_subject: String,
    /// Whether an admin has locked it.
    #[serde(default)]
    pub is_admin_locked: bool,
}

impl AllocationRow {
    /// Converts the row, using `owner` when the row does not name one.
    #[must_use]
    pub fn into_allocation(self, owner: StaffId) -> Allocation {
        Allocation {
            id: self.id,
            staff_id: self.staff_id.unwrap_or(owner),
            day_of_week: self.day_of_week,
            period_number: self.period_number,
            class_subject: self.class_subject,
            is_admin_locked: self.is_admin_locked,
        }
    }
}

/// A swap request row as listed for its target.
///
/// The listing carries the offered slot's coordinates alongside the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequestRow {
    /// Backend identifier.
    pub id: SwapRequestId,
    /// The requester.
    #[serde(alias = "requester_staff_id")]
    pub requester_id: StaffId,
    /// The offered assignment.
    pub assignment_id: AssignmentId,
    /// The target; absent from the backend's listing, which is always the
    /// target's own.
    #[serde(default)]
    pub target_staff_id: Option<StaffId>,
    /// Requester's reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: SwapStatus,
    /// Target's reply.
    #[serde(default)]
    pub response_reason: Option<String>,
    /// Day of the offered slot.
    #[serde(default)]
    pub day_of_week: Option<DayOfWeek>,
    /// Period of the offered slot.
    #[serde(default)]
    pub period_number: Option<PeriodNumber>,
    /// Display text of the offered slot.
    #[serde(default)]
    pub class_subject: Option<String>,
    /// Whether the offered slot is locked, when the listing says.
    #[serde(default)]
    pub is_locked: Option<bool>,
}

/// A swap request together with the assignment it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequestListing {
    /// The request.
    pub request: SwapRequest,
    /// The offered assignment, when the row carried its slot.
    pub offered: Option<Assignment>,
}

impl SwapRequestRow {
    /// Converts the row, using `viewer` as the target when the row does not
    /// name one.
    #[must_use]
    pub fn into_listing(self, viewer: StaffId) -> SwapRequestListing {
        let offered: Option<Assignment> = match (self.day_of_week, self.period_number) {
            (Some(day_of_week), Some(period_number)) => Some(Assignment {
                id: self.assignment_id,
                staff_id: self.requester_id,
                day_of_week,
                period_number,
                class_subject: self.class_subject.unwrap_or_default(),
                is_locked: self.is_locked.unwrap_or(false),
                room_number: None,
                level_id: None,
                section_id: None,
            }),
            _ => None,
        };
        let request: SwapRequest = SwapRequest {
            id: self.id,
            requester_staff_id: self.requester_id,
            assignment_id: self.assignment_id,
            target_staff_id: self.target_staff_id.unwrap_or(viewer),
            reason: self.reason.unwrap_or_default(),
            status: self.status,
            response_reason: self.response_reason,
        };
        SwapRequestListing { request, offered }
    }
}

/// Body of `POST /api/timetable/swap/request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequestBody {
    /// The assignment offered.
    pub assignment_id: AssignmentId,
    /// The staff member asked.
    pub target_staff_id: StaffId,
    /// Free-text reason.
    pub reason: String,
}

/// Body of `POST /api/timetable/swap/respond`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapResponseBody {
    /// The request answered.
    pub request_id: SwapRequestId,
    /// Accept or reject.
    pub accept: bool,
    /// Free-text reply.
    pub response_reason: String,
}

/// Body of `POST /api/timetable/allocation/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAllocationBody {
    /// Day of the slot.
    pub day_of_week: DayOfWeek,
    /// Period of the slot.
    pub period_number: PeriodNumber,
    /// What will be taught.
    pub class_subject: String,
}

/// Body of `POST /api/timetable/allocation/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAllocationBody {
    /// The allocation.
    pub allocation_id: AllocationId,
    /// The new text.
    pub class_subject: String,
}

/// Body of `POST /api/timetable/allocation/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllocationBody {
    /// The allocation.
    pub allocation_id: AllocationId,
}

/// Body of `POST /api/timetable/assignment/override`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideAssignmentBody {
    /// The assignment.
    pub assignment_id: AssignmentId,
    /// The new owner.
    pub new_staff_id: StaffId,
    /// Admin notes.
    pub admin_notes: String,
}
