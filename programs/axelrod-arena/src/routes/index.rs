//! Results page: runs the tournament, writes the report, charts the totals

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;

use crate::error::AppError;
use crate::page::render_index;
use crate::report::write_report;
use crate::state::{AppState, RunParams};

pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RunParams>,
) -> Result<Html<String>, AppError> {
    let result = state.run(params).await?;
    write_report(&state.config.report_path, &result.standings).await?;
    Ok(Html(render_index(&result)))
}
