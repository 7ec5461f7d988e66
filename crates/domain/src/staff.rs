// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::slots::{Allocation, Assignment};
use crate::types::{SlotKey, StaffId};
use serde::{Deserialize, Serialize};

/// A staff member as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Backend identifier.
    pub id: StaffId,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Department key, when the staff record has one.
    #[serde(default)]
    pub department: Option<String>,
}

/// Lists staff who could take a slot: same department when one is given,
/// not `exclude`, and with no assignment or allocation at that slot.
///
/// Results are sorted by name.
#[must_use]
pub fn free_staff_for_slot<'a>(
    candidates: &'a [StaffMember],
    assignments: &[Assignment],
    allocations: &[Allocation],
    slot: SlotKey,
    exclude: StaffId,
    department: Option<&str>,
) -> Vec<&'a StaffMember> {
    let busy = |staff_id: StaffId| -> bool {
        assignments
            .iter()
            .any(|a| a.staff_id == staff_id && a.slot() == slot)
            || allocations
                .iter()
                .any(|a| a.staff_id == staff_id && a.slot() == slot)
    };

    let mut free: Vec<&StaffMember> = candidates
        .iter()
        .filter(|s| s.id != exclude)
        .filter(|s| department.is_none_or(|d| s.department.as_deref() == Some(d)))
        .filter(|s| !busy(s.id))
        .collect();
    free.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    free
}
