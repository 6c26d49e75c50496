//! Handler errors

use axelrod_logic::TournamentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Tournament(#[from] TournamentError),

    #[error("report could not be written: {0}")]
    Report(#[from] std::io::Error),

    #[error("tournament task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Tournament(_) => StatusCode::BAD_REQUEST,
            AppError::Report(_) | AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(%status, "{}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
