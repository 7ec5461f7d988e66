// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares a numeric identifier assigned by the backend.
macro_rules! backend_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw backend identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw backend identifier.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

backend_id!(
    /// Identifies a staff member.
    StaffId
);
backend_id!(
    /// Identifies an admin-defined period template.
    PeriodId
);
backend_id!(
    /// Identifies an admin-created assignment.
    AssignmentId
);
backend_id!(
    /// Identifies a staff self-allocation.
    AllocationId
);
backend_id!(
    /// Identifies a peer-to-peer swap request.
    SwapRequestId
);
backend_id!(
    /// Identifies an academic level (grade).
    LevelId
);
backend_id!(
    /// Identifies a section within an academic level.
    SectionId
);

/// A day of the week, `0 = Sunday` through `6 = Saturday`.
///
/// The numbering follows the backend, which stores days as small integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    /// Number of days in a timetable week.
    pub const COUNT: u8 = 7;

    /// Creates a validated day of the week.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDayOfWeek` if `value` is not in `0..=6`.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidDayOfWeek(value))
        }
    }

    /// Returns the numeric day value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Iterates over every day of the week, Sunday first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self)
    }

    /// Returns the English day name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.0 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A positive period number within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PeriodNumber(u32);

impl PeriodNumber {
    /// The first period of a day.
    pub const FIRST: Self = Self(1);

    /// Creates a validated period number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPeriodNumber` if `value` is zero.
    pub const fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            Err(DomainError::InvalidPeriodNumber(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the numeric period value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the following period number, saturating at `u32::MAX`.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for PeriodNumber {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PeriodNumber> for u32 {
    fn from(number: PeriodNumber) -> Self {
        number.0
    }
}

impl std::fmt::Display for PeriodNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `(day, period)` coordinate in the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    /// The day of the week.
    pub day: DayOfWeek,
    /// The period number within the day.
    pub period_number: PeriodNumber,
}

impl SlotKey {
    /// Creates a slot key.
    #[must_use]
    pub const fn new(day: DayOfWeek, period_number: PeriodNumber) -> Self {
        Self { day, period_number }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} period {}", self.day, self.period_number)
    }
}

/// A wall-clock time of day in `HH:MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(time::Time);

const CLOCK_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[hour]:[minute]");

impl ClockTime {
    /// Creates a clock time from hour and minute.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the components are out of range.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        time::Time::from_hms(hour, minute, 0)
            .map(Self)
            .map_err(|e| DomainError::InvalidTime {
                value: format!("{hour:02}:{minute:02}"),
                reason: e.to_string(),
            })
    }

    /// Returns the underlying `time::Time`.
    #[must_use]
    pub const fn as_time(&self) -> time::Time {
        self.0
    }

    /// Whole minutes from `self` until `later`; negative when `later` is earlier.
    #[must_use]
    pub fn minutes_until(&self, later: Self) -> i64 {
        (later.0 - self.0).whole_minutes()
    }
}

impl FromStr for ClockTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Time::parse(s.trim(), CLOCK_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::InvalidTime {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
