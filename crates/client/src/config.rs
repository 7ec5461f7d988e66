// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments and the validated client configuration.

use std::time::Duration;

use clap::{Parser, Subcommand};
use staff_timetable::{Actor, Command, Role, Scope};
use staff_timetable_domain::{
    AllocationId, AssignmentId, DayOfWeek, DomainError, PeriodNumber, SectionId, SlotKey, StaffId,
    SwapRequestId,
};
use staff_timetable_api::DEFAULT_REQUEST_TIMEOUT;
use thiserror::Error;

/// Default seconds between background refreshes.
pub const DEFAULT_POLL_SECS: u64 = 30;

/// Staff Timetable - weekly timetable, swaps and self-allocation
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the school-management backend
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Staff id of the acting user
    #[arg(short, long)]
    pub staff_id: i64,

    /// Role of the acting user (staff or admin)
    #[arg(short, long, default_value = "staff")]
    pub role: String,

    /// Show a whole section instead of the acting user's own timetable
    #[arg(long)]
    pub section_id: Option<i64>,

    /// School id, for backends that do not derive it from the session
    #[arg(long)]
    pub school_id: Option<i64>,

    /// Anti-forgery token sent with every mutating request
    #[arg(long)]
    pub csrf_token: Option<String>,

    /// Seconds between background refreshes
    #[arg(short, long, default_value_t = DEFAULT_POLL_SECS)]
    pub poll_interval: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Print the timetable once and exit instead of polling
    #[arg(long)]
    pub once: bool,

    /// Action to perform before showing the timetable
    #[command(subcommand)]
    pub action: Option<Action>,
}

/// Actions the client can perform against the timetable.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ask another staff member to take one of your assignments
    RequestSwap {
        /// The assignment to give away
        #[arg(long)]
        assignment: i64,
        /// The staff member asked to take it
        #[arg(long)]
        target: i64,
        /// Why the swap is needed
        #[arg(long, default_value = "")]
        reason: String,
    },
    /// Accept or reject a swap request addressed to you
    Respond {
        /// The request to answer
        #[arg(long)]
        request: i64,
        /// Accept the request (rejects when absent)
        #[arg(long)]
        accept: bool,
        /// Optional note for the requester
        #[arg(long)]
        reason: Option<String>,
    },
    /// Claim an empty slot
    Allocate {
        /// Day of week, 0 = Sunday
        #[arg(long)]
        day: u8,
        /// Period number
        #[arg(long)]
        period: u32,
        /// Class and subject text
        #[arg(long)]
        class_subject: String,
    },
    /// Change the text of one of your allocations
    EditAllocation {
        /// The allocation to edit
        #[arg(long)]
        allocation: i64,
        /// New class and subject text
        #[arg(long)]
        class_subject: String,
    },
    /// Remove one of your allocations
    DeleteAllocation {
        /// The allocation to remove
        #[arg(long)]
        allocation: i64,
    },
    /// Set a department's swap permissions (admin)
    Department {
        /// Department name
        #[arg(long)]
        name: String,
        /// Allow the department's staff to give slots away
        #[arg(long)]
        allow_alterations: bool,
        /// Allow the department's staff to receive slots
        #[arg(long)]
        allow_inbound: bool,
    },
    /// Reassign and lock an assignment (admin)
    Override {
        /// The assignment to reassign
        #[arg(long)]
        assignment: i64,
        /// The new owner
        #[arg(long)]
        staff: i64,
        /// Notes kept with the override
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List staff free to take a slot
    Candidates {
        /// Day of week, 0 = Sunday
        #[arg(long)]
        day: u8,
        /// Period number
        #[arg(long)]
        period: u32,
        /// Only staff of this department
        #[arg(long)]
        department: Option<String>,
    },
}

impl Action {
    /// The command this action dispatches, or `None` for read-only actions.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if a day or period number is out of range.
    pub fn command(&self) -> Result<Option<Command>, DomainError> {
        let command: Command = match self {
            Self::RequestSwap {
                assignment,
                target,
                reason,
            } => Command::RequestSwap {
                assignment_id: AssignmentId::new(*assignment),
                target_staff_id: StaffId::new(*target),
                reason: reason.clone(),
            },
            Self::Respond {
                request,
                accept,
                reason,
            } => Command::RespondSwap {
                request_id: SwapRequestId::new(*request),
                accept: *accept,
                reason: reason.clone(),
            },
            Self::Allocate {
                day,
                period,
                class_subject,
            } => Command::CreateAllocation {
                day: DayOfWeek::new(*day)?,
                period_number: PeriodNumber::new(*period)?,
                class_subject: class_subject.clone(),
            },
            Self::EditAllocation {
                allocation,
                class_subject,
            } => Command::UpdateAllocation {
                allocation_id: AllocationId::new(*allocation),
                class_subject: class_subject.clone(),
            },
            Self::DeleteAllocation { allocation } => Command::DeleteAllocation {
                allocation_id: AllocationId::new(*allocation),
            },
            Self::Department {
                name,
                allow_alterations,
                allow_inbound,
            } => Command::UpdateDepartmentPermission {
                department: name.clone(),
                allow_alterations: *allow_alterations,
                allow_inbound: *allow_inbound,
            },
            Self::Override {
                assignment,
                staff,
                notes,
            } => Command::OverrideAssignment {
                assignment_id: AssignmentId::new(*assignment),
                new_staff_id: StaffId::new(*staff),
                notes: notes.clone(),
            },
            Self::Candidates { .. } => return Ok(None),
        };
        Ok(Some(command))
    }

    /// The slot a candidates lookup targets.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if a day or period number is out of range.
    pub fn candidate_slot(&self) -> Result<Option<(SlotKey, Option<&str>)>, DomainError> {
        match self {
            Self::Candidates {
                day,
                period,
                department,
            } => Ok(Some((
                SlotKey::new(DayOfWeek::new(*day)?, PeriodNumber::new(*period)?),
                department.as_deref(),
            ))),
            _ => Ok(None),
        }
    }
}

/// Errors produced while validating arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base URL is not an http(s) URL.
    #[error("Base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
    /// The role is not recognized.
    #[error("Unknown role '{0}'. Expected 'staff' or 'admin'")]
    InvalidRole(String),
    /// A duration argument was zero.
    #[error("{0} must be at least one second")]
    ZeroDuration(&'static str),
    /// A section view was requested by a non-admin.
    #[error("Viewing a whole section requires the admin role")]
    SectionRequiresAdmin,
}

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: String,
    /// The slice of the timetable to show.
    pub scope: Scope,
    /// Who is acting.
    pub actor: Actor,
    /// Time between background refreshes.
    pub poll_interval: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Anti-forgery token for mutations.
    pub csrf_token: Option<String>,
    /// School id sent with reads.
    pub school_id: Option<i64>,
    /// Print once and exit.
    pub one_shot: bool,
}

impl ClientConfig {
    /// Validates parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid argument.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let base_url: &str = args.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(args.base_url.clone()));
        }

        let role: Role = parse_role(&args.role)?;
        let actor: Actor = Actor::new(StaffId::new(args.staff_id), role);

        let scope: Scope = match args.section_id {
            Some(section) if actor.is_admin() => Scope::Section(SectionId::new(section)),
            Some(_) => return Err(ConfigError::SectionRequiresAdmin),
            None => Scope::Staff(actor.staff_id),
        };

        if args.poll_interval == 0 {
            return Err(ConfigError::ZeroDuration("poll interval"));
        }
        if args.timeout == 0 {
            return Err(ConfigError::ZeroDuration("timeout"));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            scope,
            actor,
            poll_interval: Duration::from_secs(args.poll_interval),
            request_timeout: Duration::from_secs(args.timeout),
            csrf_token: args.csrf_token.clone().filter(|t| !t.trim().is_empty()),
            school_id: args.school_id,
            one_shot: args.once,
        })
    }
}

fn parse_role(role: &str) -> Result<Role, ConfigError> {
    match role.trim().to_ascii_lowercase().as_str() {
        "staff" | "teacher" => Ok(Role::Staff),
        "admin" => Ok(Role::Admin),
        _ => Err(ConfigError::InvalidRole(role.to_string())),
    }
}
