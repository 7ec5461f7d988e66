// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::swap::SwapStatus;
use crate::types::{AllocationId, AssignmentId, DayOfWeek, PeriodNumber, StaffId, SwapRequestId};

/// Direction of a swap as seen by a department's permission flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// The department's staff are giving a slot away (`allow_alterations`).
    Outbound,
    /// The department's staff are receiving a slot (`allow_inbound`).
    Inbound,
}

/// Coarse classification of domain errors.
///
/// Callers use this to decide how a failure is surfaced: validation errors
/// are caught before any network call, policy violations and state conflicts
/// are shown to the user and followed by a re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// The actor is not permitted to perform the action.
    PolicyViolation,
    /// The action conflicts with the current state of the data.
    StateConflict,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Day of week is outside `0..=6`.
    InvalidDayOfWeek(u8),
    /// Period numbers start at 1.
    InvalidPeriodNumber(u32),
    /// A wall-clock time could not be parsed.
    InvalidTime {
        /// The rejected input.
        value: String,
        /// The parser's explanation.
        reason: String,
    },
    /// A period ends at or before its start.
    InvalidPeriodRange {
        /// The offending period number.
        period_number: PeriodNumber,
        /// The start time as given.
        start: String,
        /// The end time as given.
        end: String,
    },
    /// A required field is missing or blank.
    MissingField(&'static str),
    /// The referenced assignment does not exist.
    AssignmentNotFound(AssignmentId),
    /// The assignment is locked and cannot be swapped.
    AssignmentLocked(AssignmentId),
    /// The requester does not own the assignment they are offering.
    NotAssignmentOwner {
        /// The assignment offered.
        assignment_id: AssignmentId,
        /// The staff member who tried to offer it.
        staff_id: StaffId,
    },
    /// A staff member cannot swap with themselves.
    SelfSwap(StaffId),
    /// A department permission forbids the swap.
    DepartmentPolicy {
        /// The department whose flag blocked the swap.
        department: String,
        /// Which flag blocked it.
        direction: SwapDirection,
    },
    /// A pending request for the same assignment and target already exists.
    DuplicateSwapRequest {
        /// The existing pending request.
        existing: SwapRequestId,
    },
    /// A swap status string is not recognised.
    InvalidSwapStatus(String),
    /// The referenced swap request does not exist.
    SwapRequestNotFound(SwapRequestId),
    /// Only the target of a swap request may respond to it.
    NotSwapTarget {
        /// The request.
        request_id: SwapRequestId,
        /// The staff member who tried to respond.
        staff_id: StaffId,
    },
    /// The swap request cannot move between these statuses.
    InvalidStateTransition {
        /// The request.
        request_id: SwapRequestId,
        /// Current status.
        from: SwapStatus,
        /// Requested status.
        to: SwapStatus,
    },
    /// The slot is not part of the resolved grid.
    SlotNotFound {
        /// The day.
        day: DayOfWeek,
        /// The period number.
        period_number: PeriodNumber,
    },
    /// The slot is already assigned or allocated.
    SlotNotEmpty {
        /// The day.
        day: DayOfWeek,
        /// The period number.
        period_number: PeriodNumber,
    },
    /// The referenced allocation does not exist.
    AllocationNotFound(AllocationId),
    /// The allocation may not be modified by this actor.
    PermissionDenied {
        /// The allocation.
        allocation_id: AllocationId,
        /// Why the change was refused.
        reason: String,
    },
}

impl DomainError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDayOfWeek(_)
            | Self::InvalidPeriodNumber(_)
            | Self::InvalidTime { .. }
            | Self::InvalidPeriodRange { .. }
            | Self::MissingField(_)
            | Self::InvalidSwapStatus(_)
            | Self::SelfSwap(_) => ErrorKind::Validation,
            Self::AssignmentLocked(_)
            | Self::NotAssignmentOwner { .. }
            | Self::DepartmentPolicy { .. }
            | Self::NotSwapTarget { .. }
            | Self::PermissionDenied { .. } => ErrorKind::PolicyViolation,
            Self::AssignmentNotFound(_)
            | Self::DuplicateSwapRequest { .. }
            | Self::SwapRequestNotFound(_)
            | Self::InvalidStateTransition { .. }
            | Self::SlotNotFound { .. }
            | Self::SlotNotEmpty { .. }
            | Self::AllocationNotFound(_) => ErrorKind::StateConflict,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDayOfWeek(day) => {
                write!(f, "Invalid day of week: {day}. Must be between 0 and 6")
            }
            Self::InvalidPeriodNumber(number) => {
                write!(f, "Invalid period number: {number}. Must be at least 1")
            }
            Self::InvalidTime { value, reason } => {
                write!(f, "Invalid time '{value}' (expected HH:MM): {reason}")
            }
            Self::InvalidPeriodRange {
                period_number,
                start,
                end,
            } => {
                write!(
                    f,
                    "Period {period_number} must end after it starts ({start} - {end})"
                )
            }
            Self::MissingField(field) => write!(f, "Missing required field: {field}"),
            Self::AssignmentNotFound(id) => write!(f, "Assignment {id} not found"),
            Self::AssignmentLocked(id) => {
                write!(f, "Assignment {id} is locked and cannot be swapped")
            }
            Self::NotAssignmentOwner {
                assignment_id,
                staff_id,
            } => {
                write!(
                    f,
                    "Staff {staff_id} does not own assignment {assignment_id}"
                )
            }
            Self::SelfSwap(staff_id) => {
                write!(f, "Staff {staff_id} cannot request a swap with themselves")
            }
            Self::DepartmentPolicy {
                department,
                direction,
            } => match direction {
                SwapDirection::Outbound => {
                    write!(f, "Department '{department}' does not allow alterations")
                }
                SwapDirection::Inbound => {
                    write!(f, "Department '{department}' does not accept inbound swaps")
                }
            },
            Self::DuplicateSwapRequest { existing } => {
                write!(f, "A pending swap request ({existing}) already exists")
            }
            Self::InvalidSwapStatus(status) => write!(f, "Invalid swap status: {status}"),
            Self::SwapRequestNotFound(id) => write!(f, "Swap request {id} not found"),
            Self::NotSwapTarget {
                request_id,
                staff_id,
            } => {
                write!(
                    f,
                    "Staff {staff_id} is not the target of swap request {request_id}"
                )
            }
            Self::InvalidStateTransition {
                request_id,
                from,
                to,
            } => {
                write!(
                    f,
                    "Swap request {request_id} cannot move from {from} to {to}"
                )
            }
            Self::SlotNotFound { day, period_number } => {
                write!(f, "No period {period_number} on {day}")
            }
            Self::SlotNotEmpty { day, period_number } => {
                write!(f, "{day} period {period_number} is already taken")
            }
            Self::AllocationNotFound(id) => write!(f, "Allocation {id} not found"),
            Self::PermissionDenied {
                allocation_id,
                reason,
            } => {
                write!(f, "Allocation {allocation_id}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
