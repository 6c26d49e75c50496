//! Shared request state
//!
//! Only immutable configuration is shared. Every request builds its own
//! roster, so concurrent runs never touch the same players.

use axelrod_logic::{default_roster, run_tournament, TournamentConfig, TournamentResult};
use serde::Deserialize;

use crate::error::AppError;
use crate::ServerConfig;

/// Optional overrides accepted by every run endpoint
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct RunParams {
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
}

pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn tournament_config(&self, params: RunParams) -> TournamentConfig {
        TournamentConfig::new(
            params.rounds.unwrap_or(self.config.rounds),
            params.seed.unwrap_or_else(rand::random::<u64>),
        )
    }

    /// Run the registry tournament off the async runtime
    pub async fn run(&self, params: RunParams) -> Result<TournamentResult, AppError> {
        let config = self.tournament_config(params);
        tracing::info!(rounds = config.rounds, seed = config.seed, "running tournament");

        let result =
            tokio::task::spawn_blocking(move || run_tournament(&default_roster(), &config))
                .await??;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_params_win() {
        let state = AppState::new(ServerConfig::default());
        let config = state.tournament_config(RunParams {
            rounds: Some(12),
            seed: Some(99),
        });
        assert_eq!(config, TournamentConfig::new(12, 99));
    }

    #[test]
    fn test_missing_seed_is_drawn_fresh() {
        let state = AppState::new(ServerConfig::default());
        let seeds: Vec<u64> = (0..4)
            .map(|_| state.tournament_config(RunParams::default()).seed)
            .collect();
        assert_eq!(state.tournament_config(RunParams::default()).rounds, 1000);
        // Four independent 64-bit draws colliding is not a realistic outcome
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }
}
