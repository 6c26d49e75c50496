//! JSON results of a fresh run

use std::sync::Arc;

use axelrod_logic::TournamentResult;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::{AppState, RunParams};

pub async fn results_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RunParams>,
) -> Result<Json<TournamentResult>, AppError> {
    let result = state.run(params).await?;
    Ok(Json(result))
}
