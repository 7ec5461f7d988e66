// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::actor::Actor;
use crate::call::BackendCall;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Scope, TimetableState, TransitionResult};
use staff_timetable_domain::{
    Allocation, Assignment, DepartmentPermission, DomainError, SwapRequest, SwapStatus,
    find_mutable_allocation, validate_allocation_create, validate_class_subject,
    validate_department, validate_swap_request, validate_swap_response,
};

/// Applies a command to the current state, producing a new state and the
/// backend calls that make it durable.
///
/// Every check runs before anything is produced, so a failing command never
/// yields a call. The returned state is the expected outcome; the read path
/// replaces it with the backend's answer.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and backend calls
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command requires the admin role and the actor is not an admin
/// - The command violates domain rules
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &TimetableState,
    command: Command,
    actor: Actor,
) -> Result<TransitionResult, CoreError> {
    if command.requires_admin() && !actor.is_admin() {
        return Err(CoreError::Unauthorized {
            command: command.name(),
            staff_id: actor.staff_id,
        });
    }

    match command {
        Command::RequestSwap {
            assignment_id,
            target_staff_id,
            reason,
        } => {
            let assignment: &Assignment = validate_swap_request(
                &state.assignments,
                &state.outgoing_requests,
                &state.policy,
                actor.staff_id,
                assignment_id,
                target_staff_id,
            )?;

            let request: SwapRequest = SwapRequest {
                id: state.provisional_request_id(),
                requester_staff_id: actor.staff_id,
                assignment_id: assignment.id,
                target_staff_id,
                reason: reason.clone(),
                status: SwapStatus::Pending,
                response_reason: None,
            };

            let mut new_state: TimetableState = state.clone();
            new_state.outgoing_requests.push(request);

            Ok(TransitionResult {
                new_state,
                calls: vec![BackendCall::CreateSwapRequest {
                    assignment_id,
                    target_staff_id,
                    reason,
                }],
            })
        }
        Command::RespondSwap {
            request_id,
            accept,
            reason,
        } => {
            let request: &SwapRequest = state
                .find_swap_request(request_id)
                .ok_or(DomainError::SwapRequestNotFound(request_id))?;
            let assignment: Option<&Assignment> = state.find_assignment(request.assignment_id);

            let status: SwapStatus =
                validate_swap_response(request, assignment, actor.staff_id, accept)?;

            let mut new_state: TimetableState = state.clone();
            if let Some(stored) = new_state
                .swap_requests
                .iter_mut()
                .find(|r| r.id == request_id)
            {
                stored.transition(status)?;
                stored.response_reason.clone_from(&reason);
            }
            if status == SwapStatus::Accepted {
                new_state.reassign(request.assignment_id, request.target_staff_id, false);
            }

            Ok(TransitionResult {
                new_state,
                calls: vec![BackendCall::RespondSwapRequest {
                    request_id,
                    accept,
                    response_reason: reason.unwrap_or_default(),
                }],
            })
        }
        Command::CreateAllocation {
            day,
            period_number,
            class_subject,
        } => {
            if state.scope != Scope::Staff(actor.staff_id) {
                return Err(CoreError::Unauthorized {
                    command: "CreateAllocation",
                    staff_id: actor.staff_id,
                });
            }
            validate_allocation_create(&state.grid(), day, period_number, &class_subject)?;

            let allocation: Allocation = Allocation {
                id: state.provisional_allocation_id(),
                staff_id: actor.staff_id,
                day_of_week: day,
                period_number,
                class_subject: class_subject.clone(),
                is_admin_locked: false,
            };

            let mut new_state: TimetableState = state.clone();
            new_state.allocations.push(allocation);

            Ok(TransitionResult {
                new_state,
                calls: vec![BackendCall::SaveAllocation {
                    day_of_week: day,
                    period_number,
                    class_subject,
                }],
            })
        }
        Command::UpdateAllocation {
            allocation_id,
            class_subject,
        } => {
            validate_class_subject(&class_subject)?;
            find_mutable_allocation(&state.allocations, allocation_id, actor.staff_id)?;

            let mut new_state: TimetableState = state.clone();
            if let Some(stored) = new_state
                .allocations
                .iter_mut()
                .find(|a| a.id == allocation_id)
            {
                stored.class_subject.clone_from(&class_subject);
            }

            Ok(TransitionResult {
                new_state,
                calls: vec![BackendCall::UpdateAllocation {
                    allocation_id,
                    class_subject,
                }],
            })
        }
        Command::DeleteAllocation { allocation_id } => {
            find_mutable_allocation(&state.allocations, allocation_id, actor.staff_id)?;

            let mut new_state: TimetableState = state.clone();
            new_state.allocations.retain(|a| a.id != allocation_id);

            Ok(TransitionResult {
                new_state,
                calls: vec![BackendCall::DeleteAllocation { allocation_id }],
            })
        }
        Command::UpdateDepartmentPermission {
            department,
            allow_alterations,
            allow_inbound,
        } => {
            validate_department(&department)?;

            let permission: DepartmentPermission = DepartmentPermission {
                department,
                allow_alterations,
                allow_inbound,
            };

            let mut new_state: TimetableState = state.clone();
            new_state.policy.set_permission(permission.clone());

            Ok(TransitionResult {
                new_state,
                calls: vec![BackendCall::UpdateDepartmentPermission(permission)],
            })
        }
        Command::OverrideAssignment {
            assignment_id,
            new_staff_id,
            notes,
        } => {
            if !state.assignments.iter().any(|a| a.id == assignment_id) {
                return Err(CoreError::DomainViolation(DomainError::AssignmentNotFound(
                    assignment_id,
                )));
            }

            let mut new_state: TimetableState = state.clone();
            new_state.reassign(assignment_id, new_staff_id, true);

            Ok(TransitionResult {
                new_state,
                calls: vec![BackendCall::OverrideAssignment {
                    assignment_id,
                    new_staff_id,
                    admin_notes: notes,
                }],
            })
        }
    }
}
