// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dto::SwapRequestListing;
use crate::error::ApiError;
use async_trait::async_trait;
use staff_timetable::{BackendCall, Scope};
use staff_timetable_domain::{
    Allocation, Assignment, DepartmentPermission, Period, StaffId, StaffMember,
};

/// The backend contract the view controller reads from and writes to.
///
/// Reads return whole lists; callers replace their copy wholesale. A
/// mutation either succeeds or fails with the backend's reason, and is
/// never retried here.
#[async_trait]
pub trait TimetableBackend: Send + Sync + 'static {
    /// Period templates visible to the scope.
    async fn fetch_periods(&self, scope: Scope) -> Result<Vec<Period>, ApiError>;

    /// Assignments in the scope.
    async fn fetch_assignments(&self, scope: Scope) -> Result<Vec<Assignment>, ApiError>;

    /// A staff member's self-allocations.
    async fn fetch_allocations(&self, staff_id: StaffId) -> Result<Vec<Allocation>, ApiError>;

    /// Swap requests addressed to a staff member.
    async fn fetch_swap_requests(
        &self,
        staff_id: StaffId,
    ) -> Result<Vec<SwapRequestListing>, ApiError>;

    /// Stored department permissions.
    async fn fetch_departments(&self) -> Result<Vec<DepartmentPermission>, ApiError>;

    /// Staff of the school, with departments.
    async fn fetch_staff(&self) -> Result<Vec<StaffMember>, ApiError>;

    /// Performs one mutating call.
    async fn send(&self, call: &BackendCall) -> Result<(), ApiError>;
}
