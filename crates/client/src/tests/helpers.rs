// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-memory backend that enforces the same rules as the real one.
//!
//! The client's local checks can be stale; this backend is what decides.
//! Tests mutate `Store` directly to simulate changes made by other users.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use staff_timetable::{Actor, BackendCall, Scope};
use staff_timetable_api::{ApiError, SwapRequestListing, TimetableBackend};
use staff_timetable_domain::{
    Allocation, AllocationId, Assignment, AssignmentId, ClockTime, DayOfWeek,
    DepartmentPermission, DepartmentPolicy, Period, PeriodId, PeriodNumber, SectionId, StaffId, StaffMember,
    SwapRequest, SwapRequestId, SwapStatus,
};
use tokio::sync::{Mutex, MutexGuard};

use crate::ViewController;

pub const ASHA: i64 = 1;
pub const BALA: i64 = 2;
pub const CHEN: i64 = 3;
pub const ADMIN: i64 = 99;
pub const SECTION: i64 = 5;

pub fn day(value: u8) -> DayOfWeek {
    DayOfWeek::new(value).unwrap()
}

pub fn period_number(value: u32) -> PeriodNumber {
    PeriodNumber::new(value).unwrap()
}

/// Everything the backend stores.
#[derive(Debug, Default)]
pub struct Store {
    pub periods: Vec<Period>,
    pub assignments: Vec<Assignment>,
    pub allocations: Vec<Allocation>,
    pub requests: Vec<SwapRequest>,
    pub departments: Vec<DepartmentPermission>,
    pub staff: Vec<StaffMember>,
    /// Calls accepted by the backend, in order.
    pub sent: Vec<BackendCall>,
    /// List every swap request twice, as some backends do.
    pub repeat_listings: bool,
    /// Fail every call with a network error.
    pub offline: bool,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn policy(&self) -> DepartmentPolicy {
        DepartmentPolicy::from_parts(
            self.departments.clone(),
            self.staff
                .iter()
                .filter_map(|s| s.department.clone().map(|d| (s.id, d))),
        )
    }

    fn assignment_mut(&mut self, id: AssignmentId) -> Result<&mut Assignment, ApiError> {
        self.assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| rejected(404, "Assignment not found"))
    }

    fn own_allocation(
        &mut self,
        id: AllocationId,
        acting: StaffId,
    ) -> Result<&mut Allocation, ApiError> {
        let allocation: &mut Allocation = self
            .allocations
            .iter_mut()
            .find(|a| a.id == id && a.staff_id == acting)
            .ok_or_else(|| rejected(404, "Allocation not found"))?;
        if allocation.is_admin_locked {
            return Err(rejected(403, "Cannot modify admin-locked allocation"));
        }
        Ok(allocation)
    }
}

fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Rejected {
        status: Some(status),
        message: message.to_string(),
    }
}

/// The authoritative side of the client tests.
#[derive(Debug)]
pub struct InMemoryBackend {
    acting: Actor,
    store: Mutex<Store>,
    refreshes: AtomicUsize,
}

impl InMemoryBackend {
    pub fn new(acting: Actor, store: Store) -> Self {
        Self {
            acting,
            store: Mutex::new(store),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub async fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().await
    }

    /// Number of full reads served so far.
    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    async fn online(&self) -> Result<MutexGuard<'_, Store>, ApiError> {
        let store = self.store.lock().await;
        if store.offline {
            return Err(ApiError::Network(String::from("connection refused")));
        }
        Ok(store)
    }

    fn apply_call(&self, store: &mut Store, call: &BackendCall) -> Result<(), ApiError> {
        let acting: StaffId = self.acting.staff_id;
        match call {
            BackendCall::CreateSwapRequest {
                assignment_id,
                target_staff_id,
                reason,
            } => {
                let assignment: &mut Assignment = store.assignment_mut(*assignment_id)?;
                if assignment.staff_id != acting {
                    return Err(rejected(403, "Assignment not found or access denied"));
                }
                if assignment.is_locked {
                    return Err(rejected(400, "Cannot swap locked assignment"));
                }
                if *target_staff_id == acting {
                    return Err(rejected(400, "Cannot swap with yourself"));
                }
                store
                    .policy()
                    .check_swap(acting, *target_staff_id)
                    .map_err(|e| rejected(403, &e.to_string()))?;
                if store.requests.iter().any(|r| {
                    r.status == SwapStatus::Pending
                        && r.assignment_id == *assignment_id
                        && r.target_staff_id == *target_staff_id
                }) {
                    return Err(rejected(400, "Swap request already pending"));
                }
                let id: i64 = store.next_id();
                store.requests.push(SwapRequest {
                    id: SwapRequestId::new(id),
                    requester_staff_id: acting,
                    assignment_id: *assignment_id,
                    target_staff_id: *target_staff_id,
                    reason: reason.clone(),
                    status: SwapStatus::Pending,
                    response_reason: None,
                });
            }
            BackendCall::RespondSwapRequest {
                request_id,
                accept,
                response_reason,
            } => {
                let request: SwapRequest = store
                    .requests
                    .iter()
                    .find(|r| r.id == *request_id && r.target_staff_id == acting)
                    .cloned()
                    .ok_or_else(|| rejected(404, "Request not found"))?;
                if request.status != SwapStatus::Pending {
                    return Err(rejected(400, "Request already processed"));
                }
                if *accept {
                    let assignment: &mut Assignment = store.assignment_mut(request.assignment_id)?;
                    if assignment.is_locked {
                        return Err(rejected(400, "Assignment is now locked"));
                    }
                    assignment.staff_id = acting;
                }
                if let Some(stored) = store.requests.iter_mut().find(|r| r.id == *request_id) {
                    stored.status = if *accept {
                        SwapStatus::Accepted
                    } else {
                        SwapStatus::Rejected
                    };
                    stored.response_reason = Some(response_reason.clone());
                }
            }
            BackendCall::SaveAllocation {
                day_of_week,
                period_number,
                class_subject,
            } => {
                let taken: bool = store.assignments.iter().any(|a| {
                    a.staff_id == acting
                        && a.day_of_week == *day_of_week
                        && a.period_number == *period_number
                }) || store.allocations.iter().any(|a| {
                    a.staff_id == acting
                        && a.day_of_week == *day_of_week
                        && a.period_number == *period_number
                });
                if taken {
                    return Err(rejected(400, "Slot already taken"));
                }
                let id: i64 = store.next_id();
                store.allocations.push(Allocation {
                    id: AllocationId::new(id),
                    staff_id: acting,
                    day_of_week: *day_of_week,
                    period_number: *period_number,
                    class_subject: class_subject.clone(),
                    is_admin_locked: false,
                });
            }
            BackendCall::UpdateAllocation {
                allocation_id,
                class_subject,
            } => {
                store
                    .own_allocation(*allocation_id, acting)?
                    .class_subject
                    .clone_from(class_subject);
            }
            BackendCall::DeleteAllocation { allocation_id } => {
                store.own_allocation(*allocation_id, acting)?;
                store.allocations.retain(|a| a.id != *allocation_id);
            }
            BackendCall::UpdateDepartmentPermission(permission) => {
                if !self.acting.is_admin() {
                    return Err(rejected(403, "Unauthorized"));
                }
                store
                    .departments
                    .retain(|d| d.department != permission.department);
                store.departments.push(permission.clone());
            }
            BackendCall::OverrideAssignment {
                assignment_id,
                new_staff_id,
                ..
            } => {
                if !self.acting.is_admin() {
                    return Err(rejected(403, "Unauthorized"));
                }
                let assignment: &mut Assignment = store.assignment_mut(*assignment_id)?;
                assignment.staff_id = *new_staff_id;
                assignment.is_locked = true;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TimetableBackend for InMemoryBackend {
    async fn fetch_periods(&self, _scope: Scope) -> Result<Vec<Period>, ApiError> {
        let store = self.online().await?;
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(store.periods.clone())
    }

    async fn fetch_assignments(&self, scope: Scope) -> Result<Vec<Assignment>, ApiError> {
        let store = self.online().await?;
        Ok(store
            .assignments
            .iter()
            .filter(|a| match scope {
                Scope::Staff(staff_id) => a.staff_id == staff_id,
                Scope::Section(section_id) => a.section_id == Some(section_id),
            })
            .cloned()
            .collect())
    }

    async fn fetch_allocations(&self, staff_id: StaffId) -> Result<Vec<Allocation>, ApiError> {
        let store = self.online().await?;
        Ok(store
            .allocations
            .iter()
            .filter(|a| a.staff_id == staff_id)
            .cloned()
            .collect())
    }

    async fn fetch_swap_requests(
        &self,
        staff_id: StaffId,
    ) -> Result<Vec<SwapRequestListing>, ApiError> {
        let store = self.online().await?;
        let copies: usize = if store.repeat_listings { 2 } else { 1 };
        let mut listings: Vec<SwapRequestListing> = Vec::new();
        for request in store.requests.iter().filter(|r| r.target_staff_id == staff_id) {
            let offered: Option<Assignment> = store
                .assignments
                .iter()
                .find(|a| a.id == request.assignment_id)
                .cloned();
            for _ in 0..copies {
                listings.push(SwapRequestListing {
                    request: request.clone(),
                    offered: offered.clone(),
                });
            }
        }
        Ok(listings)
    }

    async fn fetch_departments(&self) -> Result<Vec<DepartmentPermission>, ApiError> {
        Ok(self.online().await?.departments.clone())
    }

    async fn fetch_staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        Ok(self.online().await?.staff.clone())
    }

    async fn send(&self, call: &BackendCall) -> Result<(), ApiError> {
        let mut store = self.online().await?;
        self.apply_call(&mut store, call)?;
        store.sent.push(call.clone());
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn create_test_period(number: u32) -> Period {
    let start_hour: u8 = 7 + u8::try_from(number).unwrap();
    Period {
        id: PeriodId::new(i64::from(number)),
        period_number: period_number(number),
        period_name: (number == 1).then(|| String::from("Registration")),
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
    day_value: u8,
    number: u32,
    is_locked: bool,
) -> Assignment {
    Assignment {
        id: AssignmentId::new(id),
        staff_id: StaffId::new(staff_id),
        day_of_week: day(day_value),
        period_number: period_number(number),
        class_subject: format!("Grade 7 - A - Subject {id}"),
        is_locked,
        room_number: None,
        level_id: None,
        section_id: Some(SectionId::new(SECTION)),
    }
}

pub fn create_test_allocation(
    id: i64,
    staff_id: i64,
    day_value: u8,
    number: u32,
    is_admin_locked: bool,
) -> Allocation {
    Allocation {
        id: AllocationId::new(id),
        staff_id: StaffId::new(staff_id),
        day_of_week: day(day_value),
        period_number: period_number(number),
        class_subject: String::from("Library duty"),
        is_admin_locked,
    }
}

fn create_test_staff_member(id: i64, name: &str, department: &str) -> StaffMember {
    StaffMember {
        id: StaffId::new(id),
        full_name: name.to_string(),
        department: Some(department.to_string()),
    }
}

/// A small school.
///
/// - Asha (Maths): assignment 10 on Monday P1, locked assignment 11 on
///   Monday P2, allocation 20 on Tuesday P3, admin-locked allocation 21 on
///   Tuesday P4.
/// - Bala (Maths): assignment 12 on Monday P3.
/// - Chen (Science, no alterations): assignment 13 on Tuesday P1.
pub fn create_test_store() -> Store {
    Store {
        periods: (1..=4).map(create_test_period).collect(),
        assignments: vec![
            create_test_assignment(10, ASHA, 1, 1, false),
            create_test_assignment(11, ASHA, 1, 2, true),
            create_test_assignment(12, BALA, 1, 3, false),
            create_test_assignment(13, CHEN, 2, 1, false),
        ],
        allocations: vec![
            create_test_allocation(20, ASHA, 2, 3, false),
            create_test_allocation(21, ASHA, 2, 4, true),
        ],
        departments: vec![DepartmentPermission {
            department: String::from("Science"),
            allow_alterations: false,
            allow_inbound: true,
        }],
        staff: vec![
            create_test_staff_member(ASHA, "Asha", "Maths"),
            create_test_staff_member(BALA, "Bala", "Maths"),
            create_test_staff_member(CHEN, "Chen", "Science"),
        ],
        next_id: 100,
        ..Store::default()
    }
}

/// A pending request from Asha asking Bala to take assignment 10.
pub fn create_test_pending_request() -> SwapRequest {
    SwapRequest {
        id: SwapRequestId::new(7),
        requester_staff_id: StaffId::new(ASHA),
        assignment_id: AssignmentId::new(10),
        target_staff_id: StaffId::new(BALA),
        reason: String::from("Training day"),
        status: SwapStatus::Pending,
        response_reason: None,
    }
}

/// A refreshed controller for a staff member's own timetable.
pub async fn create_test_staff_view(
    staff_id: i64,
    store: Store,
) -> (ViewController<InMemoryBackend>, Arc<InMemoryBackend>) {
    let actor: Actor = Actor::staff(StaffId::new(staff_id));
    let backend: Arc<InMemoryBackend> = Arc::new(InMemoryBackend::new(actor, store));
    let mut controller: ViewController<InMemoryBackend> =
        ViewController::new(Arc::clone(&backend), Scope::Staff(actor.staff_id), actor);
    controller.refresh().await.unwrap();
    (controller, backend)
}

/// A refreshed controller for an admin viewing the whole section.
pub async fn create_test_admin_view(
    store: Store,
) -> (ViewController<InMemoryBackend>, Arc<InMemoryBackend>) {
    let actor: Actor = Actor::admin(StaffId::new(ADMIN));
    let backend: Arc<InMemoryBackend> = Arc::new(InMemoryBackend::new(actor, store));
    let mut controller: ViewController<InMemoryBackend> = ViewController::new(
        Arc::clone(&backend),
        Scope::Section(SectionId::new(SECTION)),
        actor,
    );
    controller.refresh().await.unwrap();
    (controller, backend)
}
