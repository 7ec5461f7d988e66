// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, Scope, TimetableState};
use staff_timetable_domain::{
    Allocation, AllocationId, Assignment, AssignmentId, ClockTime, DayOfWeek, DepartmentPolicy,
    Period, PeriodId, PeriodNumber, StaffId, SwapRequest, SwapRequestId, SwapStatus,
};

pub const REQUESTER: i64 = 1;
pub const TARGET: i64 = 2;
pub const ADMIN: i64 = 99;

pub fn day(value: u8) -> DayOfWeek {
    DayOfWeek::new(value).unwrap()
}

pub fn period_number(value: u32) -> PeriodNumber {
    PeriodNumber::new(value).unwrap()
}

pub fn create_test_staff_actor(staff_id: i64) -> Actor {
    Actor::staff(StaffId::new(staff_id))
}

pub fn create_test_admin_actor() -> Actor {
    Actor::admin(StaffId::new(ADMIN))
}

pub fn create_test_period(id: i64, number: u32) -> Period {
    let start_hour: u8 = 7 + u8::try_from(number).unwrap();
    Period {
        id: PeriodId::new(id),
        period_number: period_number(number),
        period_name: None,
        start_time: ClockTime::from_hm(start_hour, 0).unwrap(),
        end_time: ClockTime::from_hm(start_hour, 45).unwrap(),
        day_of_week: None,
        level_id: None,
        section_id: None,
    }
}

pub fn create_test_assignment(
    id: i64,
    staff_id: i64,
    day_of_week: u8,
    number: u32,
    is_locked: bool,
) -> Assignment {
    Assignment {
        id: AssignmentId::new(id),
        staff_id: StaffId::new(staff_id),
        day_of_week: day(day_of_week),
        period_number: period_number(number),
        class_subject: String::from("Grade 9 - B - Chemistry"),
        is_locked,
        room_number: None,
        level_id: None,
        section_id: None,
    }
}

pub fn create_test_allocation(
    id: i64,
    staff_id: i64,
    day_of_week: u8,
    number: u32,
    is_admin_locked: bool,
) -> Allocation {
    Allocation {
        id: AllocationId::new(id),
        staff_id: StaffId::new(staff_id),
        day_of_week: day(day_of_week),
        period_number: period_number(number),
        class_subject: String::from("Exam invigilation"),
        is_admin_locked,
    }
}

pub fn create_test_swap_request(id: i64, assignment_id: i64, status: SwapStatus) -> SwapRequest {
    SwapRequest {
        id: SwapRequestId::new(id),
        requester_staff_id: StaffId::new(REQUESTER),
        assignment_id: AssignmentId::new(assignment_id),
        target_staff_id: StaffId::new(TARGET),
        reason: String::from("Hospital appointment"),
        status,
        response_reason: None,
    }
}

/// The requester's view: periods 1..=4 every day and one unlocked
/// assignment on Monday period 3.
pub fn create_test_requester_state() -> TimetableState {
    let mut state: TimetableState = TimetableState::new(Scope::Staff(StaffId::new(REQUESTER)));
    state.periods = (1..=4).map(|n| create_test_period(i64::from(n), n)).collect();
    state.assignments = vec![create_test_assignment(10, REQUESTER, 1, 3, false)];
    state.policy = DepartmentPolicy::new();
    state
}

/// The target's view: the requester's pending offer of assignment 10.
pub fn create_test_target_state() -> TimetableState {
    let mut state: TimetableState = TimetableState::new(Scope::Staff(StaffId::new(TARGET)));
    state.periods = (1..=4).map(|n| create_test_period(i64::from(n), n)).collect();
    state.swap_requests = vec![create_test_swap_request(7, 10, SwapStatus::Pending)];
    state.offered_assignments = vec![create_test_assignment(10, REQUESTER, 1, 3, false)];
    state
}
