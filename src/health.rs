//! Liveness endpoint for the hosting supervisor. Not user-facing.

use anyhow::{Context, Result};
use axum::{extract::State, routing::get, Router};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Shared liveness counters. Updated by the catalog loader and the
/// command loop, read by the root handler.
#[derive(Default)]
pub struct HealthState {
    pub catalog_ready: AtomicBool,
    pub reports_served: AtomicU64,
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_catalog_ready(&self, v: bool) {
        self.catalog_ready.store(v, Ordering::Relaxed);
    }

    pub fn inc_reports_served(&self) {
        self.reports_served.fetch_add(1, Ordering::Relaxed);
    }
}

pub fn router(state: Arc<HealthState>) -> Router {
    Router::new().route("/", get(root)).with_state(state)
}

/// GET / returns 200 with a short body as long as the process is alive.
async fn root(State(state): State<Arc<HealthState>>) -> String {
    format!(
        "OK catalog_ready={} reports_served={}",
        state.catalog_ready.load(Ordering::Relaxed),
        state.reports_served.load(Ordering::Relaxed),
    )
}

pub async fn serve(port: u16, state: Arc<HealthState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .context("Failed to bind health endpoint")?;
    info!("Health endpoint listening on port {}", port);
    axum::serve(listener, router(state))
        .await
        .context("Health endpoint server failed")?;
    Ok(())
}
