// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staff_timetable_domain::{
    AllocationId, AssignmentId, DayOfWeek, DepartmentPermission, PeriodNumber, StaffId,
    SwapRequestId,
};

/// A mutating call the backend must perform for a transition to take effect.
///
/// The acting staff member is implied by the backend session and is not
/// carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    /// Create a pending swap request.
    CreateSwapRequest {
        /// The assignment offered.
        assignment_id: AssignmentId,
        /// The staff member asked to take it.
        target_staff_id: StaffId,
        /// Free-text reason.
        reason: String,
    },
    /// Answer a swap request.
    RespondSwapRequest {
        /// The request.
        request_id: SwapRequestId,
        /// Accept or reject.
        accept: bool,
        /// Free-text reply; empty when none was given.
        response_reason: String,
    },
    /// Store a new self-allocation.
    SaveAllocation {
        /// The day of the slot.
        day_of_week: DayOfWeek,
        /// The period of the slot.
        period_number: PeriodNumber,
        /// What will be taught.
        class_subject: String,
    },
    /// Change a self-allocation's class/subject.
    UpdateAllocation {
        /// The allocation.
        allocation_id: AllocationId,
        /// The new text.
        class_subject: String,
    },
    /// Delete a self-allocation.
    DeleteAllocation {
        /// The allocation.
        allocation_id: AllocationId,
    },
    /// Upsert a department permission row.
    UpdateDepartmentPermission(DepartmentPermission),
    /// Reassign and lock an assignment.
    OverrideAssignment {
        /// The assignment.
        assignment_id: AssignmentId,
        /// The new owner.
        new_staff_id: StaffId,
        /// Admin notes.
        admin_notes: String,
    },
}

impl BackendCall {
    /// A stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateSwapRequest { .. } => "CreateSwapRequest",
            Self::RespondSwapRequest { .. } => "RespondSwapRequest",
            Self::SaveAllocation { .. } => "SaveAllocation",
            Self::UpdateAllocation { .. } => "UpdateAllocation",
            Self::DeleteAllocation { .. } => "DeleteAllocation",
            Self::UpdateDepartmentPermission(_) => "UpdateDepartmentPermission",
            Self::OverrideAssignment { .. } => "OverrideAssignment",
        }
    }
}
