// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocation;
mod department;
mod error;
mod period;
mod resolver;
mod slots;
mod staff;
mod swap;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use allocation::{
    ensure_allocation_mutable, find_mutable_allocation, validate_allocation_create,
};
pub use department::{DepartmentPermission, DepartmentPolicy};
pub use error::{DomainError, ErrorKind, SwapDirection};
pub use period::{
    Period, next_period_number, period_definition, validate_period, validate_periods,
};
pub use resolver::{
    CellState, DaySchedule, ResolvedGrid, SlotAnomaly, is_swap_eligible, resolve_grid,
};
pub use slots::{Allocation, Assignment};
pub use staff::{StaffMember, free_staff_for_slot};
pub use swap::{
    SwapRequest, SwapStatus, dedupe_swap_requests, validate_swap_request,
    validate_swap_response,
};
pub use types::{
    AllocationId, AssignmentId, ClockTime, DayOfWeek, LevelId, PeriodId, PeriodNumber,
    SectionId, SlotKey, StaffId, SwapRequestId,
};
pub use validation::{validate_class_subject, validate_department};
