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
#![allow(clippy::multiple_crate_versions)]

mod config;
mod poller;
mod render;
mod view;

#[cfg(test)]
mod tests;

pub use config::{Action, Args, ClientConfig, ConfigError, DEFAULT_POLL_SECS};
pub use poller::{Poller, ViewMount};
pub use render::{render_candidates, render_grid, render_requests};
pub use view::{SharedController, ViewController};
