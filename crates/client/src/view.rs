// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The view controller.
//!
//! Owns the client's [`TimetableState`] and the grid resolved from it. The
//! read path (`refresh`) is the only way backend truth enters the state; the
//! command path (`dispatch`) validates locally, sends the resulting calls and
//! then resynchronizes.

use std::sync::Arc;

use staff_timetable::{
    Actor, BackendCall, Command, Scope, TimetableState, TransitionResult, apply,
};
use staff_timetable_api::{ApiError, SwapRequestListing, TimetableBackend};
use staff_timetable_domain::{
    Assignment, DepartmentPolicy, ErrorKind, ResolvedGrid, SlotKey, StaffMember, SwapRequest,
    dedupe_swap_requests, free_staff_for_slot, validate_periods,
};
use tracing::{debug, info, warn};

/// A controller shared between the poller and the command path.
pub type SharedController<B> = Arc<tokio::sync::Mutex<ViewController<B>>>;

/// Holds one view's state and talks to the backend on its behalf.
#[derive(Debug)]
pub struct ViewController<B: TimetableBackend> {
    backend: Arc<B>,
    actor: Actor,
    state: TimetableState,
    grid: ResolvedGrid,
    staff: Vec<StaffMember>,
}

impl<B: TimetableBackend> ViewController<B> {
    /// Creates a controller with an empty state. Call [`Self::refresh`]
    /// before rendering.
    #[must_use]
    pub fn new(backend: Arc<B>, scope: Scope, actor: Actor) -> Self {
        let state: TimetableState = TimetableState::new(scope);
        let grid: ResolvedGrid = state.grid();
        Self {
            backend,
            actor,
            state,
            grid,
            staff: Vec::new(),
        }
    }

    /// Wraps the controller for sharing with a poller.
    #[must_use]
    pub fn into_shared(self) -> SharedController<B> {
        Arc::new(tokio::sync::Mutex::new(self))
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &TimetableState {
        &self.state
    }

    /// The grid resolved from the current state.
    #[must_use]
    pub const fn grid(&self) -> &ResolvedGrid {
        &self.grid
    }

    /// The acting user.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        self.actor
    }

    /// Staff of the school as last fetched.
    #[must_use]
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Re-fetches everything the view shows and replaces the state.
    ///
    /// All reads run concurrently; if any fails the current state is kept
    /// and the error returned.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` raised by a read.
    pub async fn refresh(&mut self) -> Result<&ResolvedGrid, ApiError> {
        let scope: Scope = self.state.scope;
        let viewer = self.actor.staff_id;
        let backend: &B = self.backend.as_ref();

        let own_allocations = async {
            match scope {
                Scope::Staff(staff_id) => backend.fetch_allocations(staff_id).await,
                Scope::Section(_) => Ok(Vec::new()),
            }
        };

        let (periods, assignments, allocations, listings, departments, staff) = futures::try_join!(
            backend.fetch_periods(scope),
            backend.fetch_assignments(scope),
            own_allocations,
            backend.fetch_swap_requests(viewer),
            backend.fetch_departments(),
            backend.fetch_staff(),
        )?;

        match validate_periods(&periods) {
            Ok(duplicates) if !duplicates.is_empty() => {
                warn!(?duplicates, "Backend returned duplicate period numbers");
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "Backend returned an invalid period"),
        }

        let (swap_requests, offered_assignments) = split_listings(listings);

        let policy: DepartmentPolicy = DepartmentPolicy::from_parts(
            departments,
            staff
                .iter()
                .filter_map(|s| s.department.clone().map(|d| (s.id, d))),
        );

        let mut state: TimetableState = TimetableState {
            scope,
            periods,
            assignments,
            allocations,
            swap_requests,
            outgoing_requests: Vec::new(),
            offered_assignments,
            policy,
        };
        state.carry_outgoing_from(&self.state, self.actor.staff_id);
        self.state = state;
        self.staff = staff;
        self.regrid();

        debug!(state = %self.state.summary(), "Refreshed timetable");
        Ok(&self.grid)
    }

    /// Applies a command and makes it durable.
    ///
    /// The command is checked against the current state before anything is
    /// sent; a local state conflict forces a refresh before it is returned.
    /// Calls are sent in order; the first refusal or transport failure
    /// stops the sequence, forces a refresh and is returned. Nothing is
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation`, `PolicyViolation` or `StateConflict`
    /// when the command fails locally, and `Rejected`, `Network` or `Decode`
    /// when the backend call fails.
    pub async fn dispatch(&mut self, command: Command) -> Result<&ResolvedGrid, ApiError> {
        let name: &'static str = command.name();
        let result: TransitionResult = match apply(&self.state, command, self.actor) {
            Ok(result) => result,
            Err(err) => {
                info!(command = name, error = %err, "Command refused locally");
                if err.kind() == ErrorKind::StateConflict {
                    self.resync().await;
                }
                return Err(ApiError::from(err));
            }
        };

        for call in &result.calls {
            if let Err(err) = self.send(call).await {
                self.resync().await;
                return Err(err);
            }
        }

        self.state = result.new_state;
        self.regrid();
        info!(command = name, actor = %self.actor.staff_id, "Command applied");

        if let Err(err) = self.refresh().await {
            warn!(command = name, error = %err, "Refresh after command failed; showing expected state");
        }
        Ok(&self.grid)
    }

    /// Staff free to take `slot`, excluding the acting user, optionally
    /// limited to one department.
    #[must_use]
    pub fn swap_candidates(&self, slot: SlotKey, department: Option<&str>) -> Vec<&StaffMember> {
        free_staff_for_slot(
            &self.staff,
            &self.state.assignments,
            &self.state.allocations,
            slot,
            self.actor.staff_id,
            department,
        )
    }

    /// Refreshes after a failure, keeping the current state if that fails too.
    async fn resync(&mut self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "Resync refresh failed");
        }
    }

    async fn send(&self, call: &BackendCall) -> Result<(), ApiError> {
        self.backend.send(call).await.inspect_err(|err| {
            warn!(call = call.name(), error = %err, "Backend call failed");
        })
    }

    fn regrid(&mut self) {
        self.grid = self.state.grid();
        for anomaly in self.grid.anomalies() {
            warn!(%anomaly, "Conflicting slot data");
        }
    }
}

/// Drops repeated requests and collects the assignments they offer.
fn split_listings(listings: Vec<SwapRequestListing>) -> (Vec<SwapRequest>, Vec<Assignment>) {
    let listed: usize = listings.len();
    let mut requests: Vec<SwapRequest> = Vec::with_capacity(listed);
    let mut offered: Vec<Assignment> = Vec::new();

    for listing in listings {
        if let Some(assignment) = listing.offered
            && !offered.iter().any(|a| a.id == assignment.id)
        {
            offered.push(assignment);
        }
        requests.push(listing.request);
    }

    let requests: Vec<SwapRequest> = dedupe_swap_requests(requests);
    if requests.len() < listed {
        debug!(
            dropped = listed - requests.len(),
            "Dropped repeated swap requests"
        );
    }
    (requests, offered)
}
