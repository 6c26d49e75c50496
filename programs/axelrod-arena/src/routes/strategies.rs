//! Strategy registry listing

use axelrod_logic::StrategyKind;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StrategyInfo {
    pub id: StrategyKind,
    pub name: &'static str,
    pub description: &'static str,
}

pub async fn list_strategies() -> Json<Vec<StrategyInfo>> {
    Json(
        StrategyKind::ALL
            .iter()
            .map(|kind| StrategyInfo {
                id: *kind,
                name: kind.display_name(),
                description: kind.describe(),
            })
            .collect(),
    )
}
