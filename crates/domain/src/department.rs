// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, SwapDirection};
use crate::types::StaffId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-department swap permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPermission {
    /// Department key as stored on staff records.
    pub department: String,
    /// Whether the department's staff may give slots away.
    #[serde(default = "default_allowed")]
    pub allow_alterations: bool,
    /// Whether the department's staff may receive slots.
    #[serde(default = "default_allowed")]
    pub allow_inbound: bool,
}

const fn default_allowed() -> bool {
    true
}

impl DepartmentPermission {
    /// The permission applied to departments with no stored row.
    #[must_use]
    pub fn permissive(department: &str) -> Self {
        Self {
            department: department.to_string(),
            allow_alterations: true,
            allow_inbound: true,
        }
    }
}

/// Snapshot of department permissions and staff membership.
///
/// Departments without a stored permission, and staff without a department,
/// are governed by the permissive default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepartmentPolicy {
    permissions: BTreeMap<String, DepartmentPermission>,
    staff_departments: BTreeMap<StaffId, String>,
}

impl DepartmentPolicy {
    /// Creates an empty, fully permissive policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            permissions: BTreeMap::new(),
            staff_departments: BTreeMap::new(),
        }
    }

    /// Builds a policy from fetched permissions and staff memberships.
    #[must_use]
    pub fn from_parts(
        permissions: impl IntoIterator<Item = DepartmentPermission>,
        staff_departments: impl IntoIterator<Item = (StaffId, String)>,
    ) -> Self {
        let mut policy: Self = Self::new();
        for permission in permissions {
            policy.set_permission(permission);
        }
        policy.staff_departments.extend(staff_departments);
        policy
    }

    /// Stores or replaces a department's permission.
    pub fn set_permission(&mut self, permission: DepartmentPermission) {
        self.permissions
            .insert(permission.department.clone(), permission);
    }

    /// Records the department a staff member belongs to.
    pub fn set_staff_department(&mut self, staff_id: StaffId, department: String) {
        self.staff_departments.insert(staff_id, department);
    }

    /// The department of a staff member, if known.
    #[must_use]
    pub fn department_of(&self, staff_id: StaffId) -> Option<&str> {
        self.staff_departments.get(&staff_id).map(String::as_str)
    }

    /// The effective permission for a department.
    #[must_use]
    pub fn permission_for(&self, department: &str) -> DepartmentPermission {
        self.permissions
            .get(department)
            .cloned()
            .unwrap_or_else(|| DepartmentPermission::permissive(department))
    }

    /// All stored permissions, ordered by department.
    pub fn permissions(&self) -> impl Iterator<Item = &DepartmentPermission> {
        self.permissions.values()
    }

    /// Checks that `requester` may give a slot to `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DepartmentPolicy` if the requester's department
    /// forbids alterations or the target's department refuses inbound swaps.
    pub fn check_swap(&self, requester: StaffId, target: StaffId) -> Result<(), DomainError> {
        if let Some(department) = self.department_of(requester)
            && !self.permission_for(department).allow_alterations
        {
            return Err(DomainError::DepartmentPolicy {
                department: department.to_string(),
                direction: SwapDirection::Outbound,
            });
        }
        if let Some(department) = self.department_of(target)
            && !self.permission_for(department).allow_inbound
        {
            return Err(DomainError::DepartmentPolicy {
                department: department.to_string(),
                direction: SwapDirection::Inbound,
            });
        }
        Ok(())
    }
}
