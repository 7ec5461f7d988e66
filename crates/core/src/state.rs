// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::call::BackendCall;
use staff_timetable_domain::{
    Allocation, AllocationId, Assignment, AssignmentId, DepartmentPolicy, Period, ResolvedGrid,
    SectionId, StaffId, SwapRequest, SwapRequestId, SwapStatus, resolve_grid,
};

/// Which slice of the school timetable a state holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// One staff member's personal timetable.
    Staff(StaffId),
    /// Every assignment in one section.
    Section(SectionId),
}

impl Scope {
    /// Returns whether an assignment owned by `staff_id` belongs in this scope.
    #[must_use]
    pub fn includes_owner(&self, staff_id: StaffId) -> bool {
        match self {
            Self::Staff(owner) => *owner == staff_id,
            Self::Section(_) => true,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staff(id) => write!(f, "staff={id}"),
            Self::Section(id) => write!(f, "section={id}"),
        }
    }
}

/// The client's copy of the timetable for one scope.
///
/// The read path replaces this wholesale; commands produce a new value and
/// never mutate the one they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableState {
    /// The scope this state was fetched for.
    pub scope: Scope,
    /// Period templates.
    pub periods: Vec<Period>,
    /// Assignments in scope.
    pub assignments: Vec<Assignment>,
    /// The acting staff member's self-allocations.
    pub allocations: Vec<Allocation>,
    /// Swap requests addressed to the acting staff member.
    pub swap_requests: Vec<SwapRequest>,
    /// Pending requests the acting staff member has sent.
    ///
    /// The backend only lists requests by target, so these are kept across
    /// refreshes by [`Self::carry_outgoing_from`].
    pub outgoing_requests: Vec<SwapRequest>,
    /// Assignments offered through visible swap requests.
    ///
    /// These belong to other staff and are outside the scope, but an accept
    /// must re-check them.
    pub offered_assignments: Vec<Assignment>,
    /// Department permissions and staff membership.
    pub policy: DepartmentPolicy,
}

impl TimetableState {
    /// Creates a new empty state for a scope.
    ///
    /// # Arguments
    ///
    /// * `scope` - The scope this state holds
    #[must_use]
    pub const fn new(scope: Scope) -> Self {
        Self {
            scope,
            periods: Vec::new(),
            assignments: Vec::new(),
            allocations: Vec::new(),
            swap_requests: Vec::new(),
            outgoing_requests: Vec::new(),
            offered_assignments: Vec::new(),
            policy: DepartmentPolicy::new(),
        }
    }

    /// Resolves the weekly grid for this state.
    #[must_use]
    pub fn grid(&self) -> ResolvedGrid {
        resolve_grid(&self.periods, &self.assignments, &self.allocations)
    }

    /// Finds an assignment in scope or among offered assignments.
    #[must_use]
    pub fn find_assignment(&self, assignment_id: AssignmentId) -> Option<&Assignment> {
        self.assignments
            .iter()
            .chain(self.offered_assignments.iter())
            .find(|a| a.id == assignment_id)
    }

    /// Finds a swap request by id.
    #[must_use]
    pub fn find_swap_request(&self, request_id: SwapRequestId) -> Option<&SwapRequest> {
        self.swap_requests.iter().find(|r| r.id == request_id)
    }

    /// Keeps `requester`'s pending outgoing requests from `previous` whose
    /// assignment is still theirs and unlocked in this state.
    ///
    /// An accepted or overridden request moves or locks its assignment, so
    /// it drops out on the refresh that observes the change.
    pub fn carry_outgoing_from(&mut self, previous: &Self, requester: StaffId) {
        let assignments: &[Assignment] = &self.assignments;
        self.outgoing_requests = previous
            .outgoing_requests
            .iter()
            .filter(|r| r.status == SwapStatus::Pending && r.requester_staff_id == requester)
            .filter(|r| {
                assignments
                    .iter()
                    .any(|a| a.id == r.assignment_id && a.staff_id == requester && !a.is_locked)
            })
            .cloned()
            .collect();
    }

    /// Moves an assignment to a new owner, keeping it in scope only if the
    /// new owner belongs there.
    pub(crate) fn reassign(&mut self, assignment_id: AssignmentId, new_owner: StaffId, lock: bool) {
        let taken: Option<Assignment> = take_assignment(&mut self.assignments, assignment_id)
            .or_else(|| take_assignment(&mut self.offered_assignments, assignment_id));
        if let Some(mut assignment) = taken {
            assignment.staff_id = new_owner;
            assignment.is_locked = assignment.is_locked || lock;
            if self.scope.includes_owner(new_owner) {
                self.assignments.push(assignment);
            }
        }
    }

    /// An identifier for a record the backend has not yet assigned one to.
    ///
    /// Provisional ids are negative so they never collide with backend ids;
    /// the next refresh replaces them.
    pub(crate) fn provisional_request_id(&self) -> SwapRequestId {
        let lowest: i64 = self
            .swap_requests
            .iter()
            .chain(self.outgoing_requests.iter())
            .map(|r| r.id.value())
            .min()
            .unwrap_or(0)
            .min(0);
        SwapRequestId::new(lowest - 1)
    }

    /// See [`Self::provisional_request_id`].
    pub(crate) fn provisional_allocation_id(&self) -> AllocationId {
        let lowest: i64 = self
            .allocations
            .iter()
            .map(|a| a.id.value())
            .min()
            .unwrap_or(0)
            .min(0);
        AllocationId::new(lowest - 1)
    }

    /// A one-line summary for logs.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{},periods={},assignments={},allocations={},requests={}",
            self.scope,
            self.periods.len(),
            self.assignments.len(),
            self.allocations.len(),
            self.swap_requests.len()
        )
    }
}

fn take_assignment(list: &mut Vec<Assignment>, assignment_id: AssignmentId) -> Option<Assignment> {
    let index: usize = list.iter().position(|a| a.id == assignment_id)?;
    Some(list.remove(index))
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: TimetableState,
    /// The backend calls that make the transition durable, in order.
    pub calls: Vec<BackendCall>,
}
