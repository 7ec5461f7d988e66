// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Allocation, AllocationId, Assignment, AssignmentId, ClockTime, DayOfWeek, Period, PeriodId,
    PeriodNumber, StaffId, SwapRequest, SwapRequestId, SwapStatus,
};

pub fn day(value: u8) -> DayOfWeek {
    DayOfWeek::new(value).unwrap()
}

pub fn period_number(value: u32) -> PeriodNumber {
    PeriodNumber::new(value).unwrap()
}

/// A 45-minute period starting on the hour `7 + number`.
pub fn create_test_period(id: i64, number: u32, day_of_week: Option<u8>) -> Period {
    let start_hour: u8 = 7 + u8::try_from(number).unwrap();
    Period {
        id: PeriodId::new(id),
        period_number: period_number(number),
        period_name: None,
        start_time: ClockTime::from_hm(start_hour, 0).unwrap(),
        end_time: ClockTime::from_hm(start_hour, 45).unwrap(),
        day_of_week: day_of_week.map(day),
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
        class_subject: String::from("Grade 7 - A - Mathematics"),
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
        class_subject: String::from("Library duty"),
        is_admin_locked,
    }
}

pub fn create_test_swap_request(
    id: i64,
    requester: i64,
    assignment_id: i64,
    target: i64,
    status: SwapStatus,
) -> SwapRequest {
    SwapRequest {
        id: SwapRequestId::new(id),
        requester_staff_id: StaffId::new(requester),
        assignment_id: AssignmentId::new(assignment_id),
        target_staff_id: StaffId::new(target),
        reason: String::from("Medical appointment"),
        status,
        response_reason: None,
    }
}
