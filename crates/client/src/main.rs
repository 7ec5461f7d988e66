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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

use clap::Parser;
use staff_timetable_api::HttpBackend;
use staff_timetable_client::{
    Args, ClientConfig, SharedController, ViewController, ViewMount, render_candidates,
    render_grid, render_requests,
};
use tracing::{error, info};

/// Renders the controller's current view.
async fn snapshot(controller: &SharedController<HttpBackend>) -> String {
    let (grid, requests): (String, String) = {
        let controller = controller.lock().await;
        (
            render_grid(controller.state(), controller.grid()),
            render_requests(controller.state()),
        )
    };
    format!("{grid}\n{requests}")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config: ClientConfig = ClientConfig::from_args(&args)?;
    info!(
        base_url = %config.base_url,
        scope = %config.scope,
        role = %config.actor.role,
        "Starting staff timetable client"
    );

    let mut backend: HttpBackend = HttpBackend::new(
        &config.base_url,
        config.csrf_token.clone(),
        config.request_timeout,
    )?;
    if let Some(school_id) = config.school_id {
        backend = backend.with_school(school_id);
    }

    let mut controller: ViewController<HttpBackend> =
        ViewController::new(Arc::new(backend), config.scope, config.actor);
    controller.refresh().await?;

    if let Some(action) = &args.action {
        if let Some((slot, department)) = action.candidate_slot()? {
            print!(
                "{}",
                render_candidates(&controller.swap_candidates(slot, department))
            );
            return Ok(());
        }
        if let Some(command) = action.command()? {
            let name: &'static str = command.name();
            if let Err(err) = controller.dispatch(command).await {
                error!(command = name, error = %err, "Command failed");
                return Err(err.into());
            }
        }
    }

    let controller: SharedController<HttpBackend> = controller.into_shared();
    let mut last: String = snapshot(&controller).await;
    print!("{last}");
    if config.one_shot {
        return Ok(());
    }

    let mut mount: ViewMount<HttpBackend> = ViewMount::new(Arc::clone(&controller));
    mount.mount(config.poll_interval).await;

    let mut ticker = tokio::time::interval(config.poll_interval);
    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                info!("Shutting down");
                break;
            }
            _ = ticker.tick() => {
                let current: String = snapshot(&controller).await;
                if current != last {
                    print!("\n{current}");
                    last = current;
                }
            }
        }
    }

    mount.unmount().await;
    Ok(())
}
