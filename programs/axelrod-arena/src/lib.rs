//! Axelrod Arena - HTTP front end for the tournament engine
//!
//! This crate provides:
//! - A page that runs the registry tournament and charts the totals
//! - A PDF report of every run
//! - A small JSON API for the same results

mod chart;
mod error;
mod page;
mod report;
mod routes;
mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

pub use chart::render_bar_chart;
pub use error::AppError;
pub use report::{render_report, write_report};
pub use state::{AppState, RunParams};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Rounds per pairing when a request does not ask for a count
    pub rounds: u32,
    /// Where each run's PDF report is written
    pub report_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            rounds: axelrod_logic::DEFAULT_ROUNDS,
            report_path: PathBuf::from("report.pdf"),
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index::index_handler))
        .route("/api/status", get(routes::status::status_handler))
        .route("/api/strategies", get(routes::strategies::list_strategies))
        .route("/api/results", get(routes::results::results_handler))
        .with_state(state)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("Axelrod Arena starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Reports written to: {}", config.report_path.display());

    let state = Arc::new(AppState::new(config));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
