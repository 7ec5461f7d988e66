// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::resolver::{CellState, ResolvedGrid};
use crate::slots::Allocation;
use crate::types::{AllocationId, DayOfWeek, PeriodNumber, StaffId};
use crate::validation::validate_class_subject;

/// Validates a staff self-allocation into a grid slot.
///
/// # Errors
///
/// Returns an error if:
/// - The class/subject text is blank
/// - The slot is not part of the grid
/// - The slot is already assigned or allocated
pub fn validate_allocation_create(
    grid: &ResolvedGrid,
    day: DayOfWeek,
    period_number: PeriodNumber,
    class_subject: &str,
) -> Result<(), DomainError> {
    validate_class_subject(class_subject)?;

    match grid.cell(day, period_number) {
        None => Err(DomainError::SlotNotFound { day, period_number }),
        Some(CellState::Empty) => Ok(()),
        Some(_) => Err(DomainError::SlotNotEmpty { day, period_number }),
    }
}

/// Checks that `staff_id` may edit or delete an allocation.
///
/// This is the single rule for allocation mutation; every path that changes
/// an allocation goes through it.
///
/// # Errors
///
/// Returns `DomainError::PermissionDenied` if the allocation belongs to
/// someone else or has been locked by an admin.
pub fn ensure_allocation_mutable(
    allocation: &Allocation,
    staff_id: StaffId,
) -> Result<(), DomainError> {
    if allocation.staff_id != staff_id {
        return Err(DomainError::PermissionDenied {
            allocation_id: allocation.id,
            reason: String::from("belongs to another staff member"),
        });
    }
    if allocation.is_admin_locked {
        return Err(DomainError::PermissionDenied {
            allocation_id: allocation.id,
            reason: String::from("locked by admin"),
        });
    }
    Ok(())
}

/// Finds an allocation by id and checks it may be changed by `staff_id`.
///
/// # Errors
///
/// Returns `DomainError::AllocationNotFound` if no allocation has the id, or
/// the error from [`ensure_allocation_mutable`].
pub fn find_mutable_allocation(
    allocations: &[Allocation],
    allocation_id: AllocationId,
    staff_id: StaffId,
) -> Result<&Allocation, DomainError> {
    let allocation: &Allocation = allocations
        .iter()
        .find(|a| a.id == allocation_id)
        .ok_or(DomainError::AllocationNotFound(allocation_id))?;
    ensure_allocation_mutable(allocation, staff_id)?;
    Ok(allocation)
}
