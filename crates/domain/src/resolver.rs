// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly grid resolution.
//!
//! Maps periods, assignments and allocations for one staff member or one
//! section onto a `(day, period)` grid where every cell is exactly one of
//! assigned, self-allocated or empty. Both the weekly view and the
//! management view render from this grid.

use crate::period::Period;
use crate::slots::{Allocation, Assignment};
use crate::types::{AllocationId, AssignmentId, DayOfWeek, PeriodNumber, SlotKey};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// The resolved state of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellState {
    /// An admin assignment occupies the slot.
    Assigned {
        /// The occupying assignment.
        assignment: Assignment,
        /// Whether the assignment is locked against swaps.
        locked: bool,
    },
    /// A staff self-allocation occupies the slot.
    SelfAllocated {
        /// The occupying allocation.
        allocation: Allocation,
        /// Whether an admin has locked the allocation.
        admin_locked: bool,
    },
    /// Nothing occupies the slot.
    Empty,
}

impl CellState {
    /// Returns whether nothing occupies this cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Returns whether a "request swap" action may be offered for a cell.
///
/// Only unlocked assignments are swap-eligible.
#[must_use]
pub const fn is_swap_eligible(cell: &CellState) -> bool {
    matches!(cell, CellState::Assigned { locked: false, .. })
}

/// A data-integrity problem found while resolving the grid.
///
/// Resolution never fails on bad data; it picks a winner and reports the
/// anomaly so the caller can log or flag it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAnomaly {
    /// Both an assignment and an allocation claim the slot; the assignment won.
    AssignmentAndAllocation {
        /// The contested slot.
        slot: SlotKey,
        /// The assignment shown in the cell.
        assignment_id: AssignmentId,
        /// The allocation hidden by it.
        allocation_id: AllocationId,
    },
    /// Two assignments claim the slot; the first one won.
    DuplicateAssignment {
        /// The contested slot.
        slot: SlotKey,
        /// The assignment shown in the cell.
        kept: AssignmentId,
        /// The assignment hidden by it.
        dropped: AssignmentId,
    },
    /// Two allocations claim the slot; the first one won.
    DuplicateAllocation {
        /// The contested slot.
        slot: SlotKey,
        /// The allocation shown in the cell.
        kept: AllocationId,
        /// The allocation hidden by it.
        dropped: AllocationId,
    },
}

impl std::fmt::Display for SlotAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssignmentAndAllocation {
                slot,
                assignment_id,
                allocation_id,
            } => write!(
                f,
                "{slot}: assignment {assignment_id} overrides allocation {allocation_id}"
            ),
            Self::DuplicateAssignment {
                slot,
                kept,
                dropped,
            } => write!(f, "{slot}: assignment {kept} shadows assignment {dropped}"),
            Self::DuplicateAllocation {
                slot,
                kept,
                dropped,
            } => write!(f, "{slot}: allocation {kept} shadows allocation {dropped}"),
        }
    }
}

/// All cells of one day, ordered by period number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    /// The day.
    pub day: DayOfWeek,
    /// Cell state per period number.
    pub cells: BTreeMap<PeriodNumber, CellState>,
}

/// The output of [`resolve_grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGrid {
    days: Vec<DaySchedule>,
    anomalies: Vec<SlotAnomaly>,
}

impl ResolvedGrid {
    /// Days in order, Sunday first. Always seven entries.
    #[must_use]
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// The schedule of one day.
    #[must_use]
    pub fn day(&self, day: DayOfWeek) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Looks up a single cell.
    #[must_use]
    pub fn cell(&self, day: DayOfWeek, period_number: PeriodNumber) -> Option<&CellState> {
        self.day(day).and_then(|d| d.cells.get(&period_number))
    }

    /// Iterates every cell in day, then period order.
    pub fn cells(&self) -> impl Iterator<Item = (SlotKey, &CellState)> {
        self.days.iter().flat_map(|d| {
            d.cells
                .iter()
                .map(move |(number, cell)| (SlotKey::new(d.day, *number), cell))
        })
    }

    /// Total number of cells across the week.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.iter().map(|d| d.cells.len()).sum()
    }

    /// Returns whether the grid has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every period number used on any day, ascending.
    #[must_use]
    pub fn period_numbers(&self) -> BTreeSet<PeriodNumber> {
        self.days
            .iter()
            .flat_map(|d| d.cells.keys().copied())
            .collect()
    }

    /// Slots with nothing in them, in grid order.
    pub fn empty_slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(slot, _)| slot)
    }

    /// Data-integrity problems found during resolution.
    #[must_use]
    pub fn anomalies(&self) -> &[SlotAnomaly] {
        &self.anomalies
    }
}

/// Resolves the weekly grid.
///
/// The period numbers of a day are the union of the periods in effect that
/// day and the assignments and allocations placed on it, so the grid follows
/// whatever periods exist rather than a fixed range. Each `(day, period)`
/// found in any input appears exactly once in the output.
///
/// Precedence: assignment, then allocation, then empty. Conflicting or
/// duplicated claims keep the first winner and are reported through
/// [`ResolvedGrid::anomalies`].
#[must_use]
pub fn resolve_grid(
    periods: &[Period],
    assignments: &[Assignment],
    allocations: &[Allocation],
) -> ResolvedGrid {
    let mut anomalies: Vec<SlotAnomaly> = Vec::new();

    let mut assigned: BTreeMap<SlotKey, &Assignment> = BTreeMap::new();
    for assignment in assignments {
        match assigned.entry(assignment.slot()) {
            Entry::Vacant(slot) => {
                slot.insert(assignment);
            }
            Entry::Occupied(slot) => anomalies.push(SlotAnomaly::DuplicateAssignment {
                slot: *slot.key(),
                kept: slot.get().id,
                dropped: assignment.id,
            }),
        }
    }

    let mut allocated: BTreeMap<SlotKey, &Allocation> = BTreeMap::new();
    for allocation in allocations {
        match allocated.entry(allocation.slot()) {
            Entry::Vacant(slot) => {
                slot.insert(allocation);
            }
            Entry::Occupied(slot) => anomalies.push(SlotAnomaly::DuplicateAllocation {
                slot: *slot.key(),
                kept: slot.get().id,
                dropped: allocation.id,
            }),
        }
    }

    let days: Vec<DaySchedule> = DayOfWeek::all()
        .map(|day| {
            let numbers: BTreeSet<PeriodNumber> = periods
                .iter()
                .filter(|p| p.applies_to(day))
                .map(|p| p.period_number)
                .chain(assigned.keys().filter(|k| k.day == day).map(|k| k.period_number))
                .chain(allocated.keys().filter(|k| k.day == day).map(|k| k.period_number))
                .collect();

            let cells: BTreeMap<PeriodNumber, CellState> = numbers
                .into_iter()
                .map(|number| {
                    let key: SlotKey = SlotKey::new(day, number);
                    let state: CellState = match (assigned.get(&key), allocated.get(&key)) {
                        (Some(assignment), allocation) => {
                            if let Some(allocation) = allocation {
                                anomalies.push(SlotAnomaly::AssignmentAndAllocation {
                                    slot: key,
                                    assignment_id: assignment.id,
                                    allocation_id: allocation.id,
                                });
                            }
                            CellState::Assigned {
                                assignment: (*assignment).clone(),
                                locked: assignment.is_locked,
                            }
                        }
                        (None, Some(allocation)) => CellState::SelfAllocated {
                            allocation: (*allocation).clone(),
                            admin_locked: allocation.is_admin_locked,
                        },
                        (None, None) => CellState::Empty,
                    };
                    (number, state)
                })
                .collect();

            DaySchedule { day, cells }
        })
        .collect();

    ResolvedGrid { days, anomalies }
}
