// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod backend;
mod dto;
pub mod endpoints;
mod envelope;
mod error;
mod http;

#[cfg(test)]
mod tests;

pub use backend::TimetableBackend;
pub use dto::{
    AllocationRow, AssignmentRow, DeleteAllocationBody, OverrideAssignmentBody,
    SaveAllocationBody, SwapRequestBody, SwapRequestListing, SwapRequestRow, SwapResponseBody,
    UpdateAllocationBody,
};
pub use envelope::{MutationResponse, list_rows};
pub use error::ApiError;
pub use http::{DEFAULT_REQUEST_TIMEOUT, HttpBackend};
