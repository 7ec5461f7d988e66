// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staff_timetable_domain::StaffId;

/// The role an actor holds in the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A teaching staff member.
    Staff,
    /// A timetable administrator.
    Admin,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents who is performing an action.
///
/// Every actor carries a staff identity; admins are staff members with
/// additional authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Actor {
    /// The staff member acting.
    pub staff_id: StaffId,
    /// The role they act in.
    pub role: Role,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `staff_id` - The staff member acting
    /// * `role` - The role they act in
    #[must_use]
    pub const fn new(staff_id: StaffId, role: Role) -> Self {
        Self { staff_id, role }
    }

    /// Creates a staff actor.
    #[must_use]
    pub const fn staff(staff_id: StaffId) -> Self {
        Self::new(staff_id, Role::Staff)
    }

    /// Creates an admin actor.
    #[must_use]
    pub const fn admin(staff_id: StaffId) -> Self {
        Self::new(staff_id, Role::Admin)
    }

    /// Returns whether this actor holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
