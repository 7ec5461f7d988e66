// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Peer-to-peer swap requests.
//!
//! A request is created `Pending` and moves exactly once, to `Accepted` or
//! `Rejected`. Acceptance transfers the offered assignment to the target.

use crate::department::DepartmentPolicy;
use crate::error::DomainError;
use crate::slots::Assignment;
use crate::types::{AssignmentId, StaffId, SwapRequestId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    /// Awaiting the target's response.
    #[default]
    Pending,
    /// The target accepted; the assignment changed hands.
    Accepted,
    /// The target declined.
    Rejected,
}

impl SwapStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Accepted
    /// - Pending → Rejected
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Accepted | Self::Rejected)
        )
    }

    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl FromStr for SwapStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidSwapStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A proposal to hand an assignment to another staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Backend identifier.
    pub id: SwapRequestId,
    /// The staff member offering the slot.
    #[serde(alias = "requester_id")]
    pub requester_staff_id: StaffId,
    /// The slot being offered.
    pub assignment_id: AssignmentId,
    /// The staff member asked to take the slot.
    pub target_staff_id: StaffId,
    /// Free-text reason from the requester.
    #[serde(default)]
    pub reason: String,
    /// Current status.
    #[serde(default)]
    pub status: SwapStatus,
    /// Free-text reason from the target, once answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_reason: Option<String>,
}

impl SwapRequest {
    /// Moves this request to `to`, enforcing the lifecycle.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` unless the request is
    /// pending and `to` is a terminal status.
    pub fn transition(&mut self, to: SwapStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(to) {
            return Err(DomainError::InvalidStateTransition {
                request_id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

/// Validates a new swap request and returns the assignment being offered.
///
/// # Errors
///
/// Returns an error if:
/// - The assignment does not exist
/// - The requester does not own the assignment
/// - The assignment is locked
/// - The requester and target are the same person
/// - A department permission forbids the swap
/// - An identical request is already pending
pub fn validate_swap_request<'a>(
    assignments: &'a [Assignment],
    requests: &[SwapRequest],
    policy: &DepartmentPolicy,
    requester: StaffId,
    assignment_id: AssignmentId,
    target: StaffId,
) -> Result<&'a Assignment, DomainError> {
    let assignment: &Assignment = assignments
        .iter()
        .find(|a| a.id == assignment_id)
        .ok_or(DomainError::AssignmentNotFound(assignment_id))?;

    if assignment.staff_id != requester {
        return Err(DomainError::NotAssignmentOwner {
            assignment_id,
            staff_id: requester,
        });
    }

    if assignment.is_locked {
        return Err(DomainError::AssignmentLocked(assignment_id));
    }

    if requester == target {
        return Err(DomainError::SelfSwap(requester));
    }

    policy.check_swap(requester, target)?;

    if let Some(existing) = requests.iter().find(|r| {
        r.status == SwapStatus::Pending
            && r.assignment_id == assignment_id
            && r.target_staff_id == target
    }) {
        return Err(DomainError::DuplicateSwapRequest {
            existing: existing.id,
        });
    }

    Ok(assignment)
}

/// Validates a response to a swap request and returns the resulting status.
///
/// Acceptance re-checks the offered assignment, which may have been locked
/// or removed since the request was made. `assignment` is the caller's
/// current view of it, `None` when it can no longer be found.
///
/// # Errors
///
/// Returns an error if:
/// - The responder is not the request's target
/// - The request is no longer pending
/// - On accept, the assignment no longer exists or is now locked
pub fn validate_swap_response(
    request: &SwapRequest,
    assignment: Option<&Assignment>,
    responder: StaffId,
    accept: bool,
) -> Result<SwapStatus, DomainError> {
    if request.target_staff_id != responder {
        return Err(DomainError::NotSwapTarget {
            request_id: request.id,
            staff_id: responder,
        });
    }

    let to: SwapStatus = if accept {
        SwapStatus::Accepted
    } else {
        SwapStatus::Rejected
    };
    if !request.status.can_transition_to(to) {
        return Err(DomainError::InvalidStateTransition {
            request_id: request.id,
            from: request.status,
            to,
        });
    }

    if accept {
        let assignment: &Assignment =
            assignment.ok_or(DomainError::AssignmentNotFound(request.assignment_id))?;
        if assignment.is_locked {
            return Err(DomainError::AssignmentLocked(assignment.id));
        }
    }

    Ok(to)
}

/// Collapses requests that share an id, keeping the first occurrence.
///
/// The backend's request listing joins against period templates and can
/// return the same request once per matching template.
#[must_use]
pub fn dedupe_swap_requests(requests: Vec<SwapRequest>) -> Vec<SwapRequest> {
    let mut seen: std::collections::HashSet<SwapRequestId> = std::collections::HashSet::new();
    requests.into_iter().filter(|r| seen.insert(r.id)).collect()
}
