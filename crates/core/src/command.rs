// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staff_timetable_domain::{
    AllocationId, AssignmentId, DayOfWeek, PeriodNumber, StaffId, SwapRequestId,
};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Offer one of the actor's assignments to another staff member.
    RequestSwap {
        /// The assignment being offered.
        assignment_id: AssignmentId,
        /// The staff member asked to take it.
        target_staff_id: StaffId,
        /// Free-text reason shown to the target.
        reason: String,
    },
    /// Accept or reject a swap request addressed to the actor.
    RespondSwap {
        /// The request being answered.
        request_id: SwapRequestId,
        /// `true` to accept, `false` to reject.
        accept: bool,
        /// Optional free-text reply.
        reason: Option<String>,
    },
    /// Claim an empty slot.
    CreateAllocation {
        /// The day of the slot.
        day: DayOfWeek,
        /// The period of the slot.
        period_number: PeriodNumber,
        /// What will be taught.
        class_subject: String,
    },
    /// Change the class/subject of one of the actor's allocations.
    UpdateAllocation {
        /// The allocation to change.
        allocation_id: AllocationId,
        /// The new class/subject text.
        class_subject: String,
    },
    /// Remove one of the actor's allocations.
    DeleteAllocation {
        /// The allocation to remove.
        allocation_id: AllocationId,
    },
    /// Store a department's swap permissions. Admin only.
    UpdateDepartmentPermission {
        /// The department key.
        department: String,
        /// Whether the department's staff may give slots away.
        allow_alterations: bool,
        /// Whether the department's staff may receive slots.
        allow_inbound: bool,
    },
    /// Reassign an assignment and lock it. Admin only.
    OverrideAssignment {
        /// The assignment to reassign.
        assignment_id: AssignmentId,
        /// The new owner.
        new_staff_id: StaffId,
        /// Admin notes recorded with the lock.
        notes: String,
    },
}

impl Command {
    /// A stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequestSwap { .. } => "RequestSwap",
            Self::RespondSwap { .. } => "RespondSwap",
            Self::CreateAllocation { .. } => "CreateAllocation",
            Self::UpdateAllocation { .. } => "UpdateAllocation",
            Self::DeleteAllocation { .. } => "DeleteAllocation",
            Self::UpdateDepartmentPermission { .. } => "UpdateDepartmentPermission",
            Self::OverrideAssignment { .. } => "OverrideAssignment",
        }
    }

    /// Returns whether only admins may issue this command.
    #[must_use]
    pub const fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::UpdateDepartmentPermission { .. } | Self::OverrideAssignment { .. }
        )
    }
}
