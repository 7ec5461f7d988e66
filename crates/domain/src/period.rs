// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ClockTime, DayOfWeek, LevelId, PeriodId, PeriodNumber, SectionId};
use serde::{Deserialize, Serialize};

/// An admin-defined time slot template.
///
/// A period with no `day_of_week` applies to every day. Level and section
/// scoping is optional; an unscoped period is global to the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Backend identifier.
    pub id: PeriodId,
    /// Position of the period within its day.
    pub period_number: PeriodNumber,
    /// Optional display label (e.g. "Assembly").
    #[serde(default)]
    pub period_name: Option<String>,
    /// Start of the period.
    pub start_time: ClockTime,
    /// End of the period.
    pub end_time: ClockTime,
    /// The day this period applies to, or every day when `None`.
    #[serde(default)]
    pub day_of_week: Option<DayOfWeek>,
    /// Optional academic level scope.
    #[serde(default)]
    pub level_id: Option<LevelId>,
    /// Optional section scope.
    #[serde(default)]
    pub section_id: Option<SectionId>,
}

impl Period {
    /// Returns whether this period is in effect on `day`.
    #[must_use]
    pub fn applies_to(&self, day: DayOfWeek) -> bool {
        self.day_of_week.is_none_or(|d| d == day)
    }

    /// Length of the period in minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        self.start_time.minutes_until(self.end_time)
    }

    /// Display label: the period name when set, otherwise "Period N".
    #[must_use]
    pub fn label(&self) -> String {
        match self.period_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Period {}", self.period_number),
        }
    }

    fn same_scope(&self, other: &Self) -> bool {
        self.level_id == other.level_id
            && self.section_id == other.section_id
            && self.day_of_week == other.day_of_week
    }
}

/// Validates a single period.
///
/// # Errors
///
/// Returns `DomainError::InvalidPeriodRange` if the period does not end
/// strictly after it starts.
pub fn validate_period(period: &Period) -> Result<(), DomainError> {
    if period.start_time >= period.end_time {
        return Err(DomainError::InvalidPeriodRange {
            period_number: period.period_number,
            start: period.start_time.to_string(),
            end: period.end_time.to_string(),
        });
    }
    Ok(())
}

/// Validates a set of periods: each must be well formed and period numbers
/// must be unique within a `(level, section, day)` scope.
///
/// Returns the numbers that are duplicated, which callers may treat as a
/// data-integrity warning.
///
/// # Errors
///
/// Returns the first `DomainError::InvalidPeriodRange` encountered.
pub fn validate_periods(periods: &[Period]) -> Result<Vec<PeriodNumber>, DomainError> {
    let mut duplicates: Vec<PeriodNumber> = Vec::new();
    for (index, period) in periods.iter().enumerate() {
        validate_period(period)?;
        let clashes: bool = periods[..index].iter().any(|earlier| {
            earlier.period_number == period.period_number && earlier.same_scope(period)
        });
        if clashes && !duplicates.contains(&period.period_number) {
            duplicates.push(period.period_number);
        }
    }
    Ok(duplicates)
}

/// Returns the next free period number for a scope: one past the highest
/// number already used, or 1 when the scope has no periods.
#[must_use]
pub fn next_period_number(
    periods: &[Period],
    level_id: Option<LevelId>,
    section_id: Option<SectionId>,
    day_of_week: Option<DayOfWeek>,
) -> PeriodNumber {
    periods
        .iter()
        .filter(|p| {
            p.level_id == level_id && p.section_id == section_id && p.day_of_week == day_of_week
        })
        .map(|p| p.period_number)
        .max()
        .map_or(PeriodNumber::FIRST, |n| n.next())
}

/// Finds the period definition used to label a grid cell.
///
/// A definition for the specific day wins over an every-day definition.
#[must_use]
pub fn period_definition(
    periods: &[Period],
    day: DayOfWeek,
    period_number: PeriodNumber,
) -> Option<&Period> {
    let mut every_day: Option<&Period> = None;
    for period in periods.iter().filter(|p| p.period_number == period_number) {
        match period.day_of_week {
            Some(d) if d == day => return Some(period),
            None if every_day.is_none() => every_day = Some(period),
            _ => {}
        }
    }
    every_day
}
