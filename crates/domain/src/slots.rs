// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{
    AllocationId, AssignmentId, DayOfWeek, LevelId, PeriodNumber, SectionId, SlotKey, StaffId,
};
use serde::{Deserialize, Serialize};

/// An admin-created binding of a staff member to a period on a given day.
///
/// Locked assignments cannot be offered for swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Backend identifier.
    pub id: AssignmentId,
    /// The staff member who teaches this slot.
    pub staff_id: StaffId,
    /// The day of the slot.
    pub day_of_week: DayOfWeek,
    /// The period of the slot.
    pub period_number: PeriodNumber,
    /// Display text for the class and subject.
    #[serde(default)]
    pub class_subject: String,
    /// Whether the assignment is frozen against swaps.
    #[serde(default)]
    pub is_locked: bool,
    /// Optional room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    /// Optional academic level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<LevelId>,
    /// Optional section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<SectionId>,
}

impl Assignment {
    /// The grid coordinate this assignment occupies.
    #[must_use]
    pub const fn slot(&self) -> SlotKey {
        SlotKey::new(self.day_of_week, self.period_number)
    }
}

/// A staff member's self-service claim on an otherwise empty slot.
///
/// Once an admin locks the allocation, staff can no longer edit or delete it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Backend identifier.
    pub id: AllocationId,
    /// The staff member who claimed the slot.
    pub staff_id: StaffId,
    /// The day of the slot.
    pub day_of_week: DayOfWeek,
    /// The period of the slot.
    pub period_number: PeriodNumber,
    /// Display text for the class and subject.
    #[serde(default)]
    pub class_subject: String,
    /// Whether an admin has finalized this allocation.
    #[serde(default)]
    pub is_admin_locked: bool,
}

impl Allocation {
    /// The grid coordinate this allocation occupies.
    #[must_use]
    pub const fn slot(&self) -> SlotKey {
        SlotKey::new(self.day_of_week, self.period_number)
    }
}
