// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Background refresh of a mounted view.
//!
//! A [`Poller`] is one tokio task that refreshes a shared controller on a
//! fixed interval until cancelled. A [`ViewMount`] owns at most one poller,
//! so a view can never be refreshed by two loops at once.

use std::time::Duration;

use staff_timetable_api::TimetableBackend;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::view::SharedController;

/// Shortest interval a poller will tick at.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// A running refresh loop.
///
/// Dropping a `Poller` cancels its task without waiting for it; use
/// [`Poller::stop`] to wait for the task to finish.
#[derive(Debug)]
pub struct Poller {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawns a task that refreshes `controller` every `interval`.
    ///
    /// The first refresh happens one interval after start; the caller is
    /// expected to have refreshed when mounting.
    #[must_use]
    pub fn start<B: TimetableBackend>(controller: SharedController<B>, interval: Duration) -> Self {
        let cancel: CancellationToken = CancellationToken::new();
        let token: CancellationToken = cancel.clone();
        let handle: JoinHandle<()> =
            tokio::spawn(async move { run(controller, interval, token).await });
        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Whether the refresh task is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancels the task and waits for it to exit.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take()
            && let Err(err) = handle.await
        {
            warn!(error = %err, "Poller task ended abnormally");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run<B: TimetableBackend>(
    controller: SharedController<B>,
    interval: Duration,
    cancel: CancellationToken,
) {
    let interval: Duration = interval.max(MIN_POLL_INTERVAL);
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(
        poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        "Timetable poller started"
    );

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!("Timetable poller stopped");
                break;
            }
            _ = ticker.tick() => {
                let refreshed = controller.lock().await.refresh().await.map(|_| ());
                match refreshed {
                    Ok(()) => debug!("Background refresh complete"),
                    Err(err) => warn!(error = %err, "Background refresh failed"),
                }
            }
        }
    }
}

/// A mounted view: a shared controller plus at most one poller.
#[derive(Debug)]
pub struct ViewMount<B: TimetableBackend> {
    controller: SharedController<B>,
    poller: Option<Poller>,
}

impl<B: TimetableBackend> ViewMount<B> {
    /// Creates an unmounted view around `controller`.
    #[must_use]
    pub const fn new(controller: SharedController<B>) -> Self {
        Self {
            controller,
            poller: None,
        }
    }

    /// The shared controller.
    #[must_use]
    pub const fn controller(&self) -> &SharedController<B> {
        &self.controller
    }

    /// Whether a poller is attached.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.poller.is_some()
    }

    /// Starts polling, stopping any poller already attached.
    pub async fn mount(&mut self, interval: Duration) {
        if let Some(previous) = self.poller.take() {
            previous.stop().await;
        }
        self.poller = Some(Poller::start(
            std::sync::Arc::clone(&self.controller),
            interval,
        ));
    }

    /// Stops polling.
    pub async fn unmount(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop().await;
        }
    }
}
