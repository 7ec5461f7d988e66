// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering for the terminal.

use staff_timetable::TimetableState;
use staff_timetable_domain::{
    CellState, DayOfWeek, PeriodNumber, ResolvedGrid, StaffMember, SwapStatus, period_definition,
};

const CELL_WIDTH: usize = 22;
const LABEL_WIDTH: usize = 16;

/// Renders the weekly grid, one row per period number and one column per
/// day that has any period.
#[must_use]
pub fn render_grid(state: &TimetableState, grid: &ResolvedGrid) -> String {
    let days: Vec<DayOfWeek> = grid
        .days()
        .iter()
        .filter(|d| !d.cells.is_empty())
        .map(|d| d.day)
        .collect();
    if days.is_empty() {
        return String::from("No periods defined.\n");
    }

    let mut lines: Vec<String> = Vec::new();
    let header: String = days.iter().fold(pad("", LABEL_WIDTH), |mut acc, day| {
        acc.push_str(&pad(day.name(), CELL_WIDTH));
        acc
    });
    lines.push(header.trim_end().to_string());

    for number in grid.period_numbers() {
        let label: String = row_label(state, &days, number);
        let mut line: String = pad(&label, LABEL_WIDTH);
        for day in &days {
            let text: String = grid
                .cell(*day, number)
                .map_or_else(String::new, cell_text);
            line.push_str(&pad(&text, CELL_WIDTH));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(String::from(
        "* swappable   [L] locked   (mine) self-allocated   [A] admin-locked",
    ));
    let mut out: String = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the pending swap requests visible to the acting user.
#[must_use]
pub fn render_requests(state: &TimetableState) -> String {
    let pending: Vec<String> = state
        .swap_requests
        .iter()
        .filter(|r| r.status == SwapStatus::Pending)
        .map(|r| {
            let slot: String = state
                .find_assignment(r.assignment_id)
                .map_or_else(
                    || format!("assignment {}", r.assignment_id),
                    |a| format!("{} {}", a.slot(), a.class_subject),
                );
            let reason: &str = if r.reason.is_empty() {
                "no reason given"
            } else {
                r.reason.as_str()
            };
            format!(
                "#{} from staff {}: {slot} ({reason})",
                r.id, r.requester_staff_id
            )
        })
        .collect();

    if pending.is_empty() {
        return String::from("No pending swap requests.\n");
    }
    let mut out: String = format!("Pending swap requests ({}):\n", pending.len());
    for line in pending {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders a list of swap candidates.
#[must_use]
pub fn render_candidates(candidates: &[&StaffMember]) -> String {
    if candidates.is_empty() {
        return String::from("No staff are free for that slot.\n");
    }
    candidates
        .iter()
        .map(|s| match &s.department {
            Some(department) => format!("{:>6}  {} ({department})\n", s.id.value(), s.full_name),
            None => format!("{:>6}  {}\n", s.id.value(), s.full_name),
        })
        .collect()
}

fn row_label(state: &TimetableState, days: &[DayOfWeek], number: PeriodNumber) -> String {
    days.iter()
        .find_map(|day| period_definition(&state.periods, *day, number))
        .map_or_else(
            || format!("Period {number}"),
            |p| format!("{} {}", p.start_time, p.label()),
        )
}

fn cell_text(cell: &CellState) -> String {
    match cell {
        CellState::Assigned {
            assignment,
            locked: true,
        } => format!("[L] {}", assignment.class_subject),
        CellState::Assigned { assignment, .. } => format!("* {}", assignment.class_subject),
        CellState::SelfAllocated {
            allocation,
            admin_locked,
        } => {
            let marker: &str = if *admin_locked { "[A] " } else { "" };
            format!("{marker}(mine) {}", allocation.class_subject)
        }
        CellState::Empty => String::from("-"),
    }
}

fn pad(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width.saturating_sub(1)).collect();
    let len: usize = cell.chars().count();
    cell.push_str(&" ".repeat(width - len));
    cell
}
