//! WASM bindings for in-browser tournament replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{default_roster, replay_pairing, run_tournament, simulate_game, Player, SeededRng};
use crate::{Strategy, StrategyKind, TournamentConfig, MAX_ROUNDS};

fn parse_kind(id: &str) -> Result<StrategyKind, JsError> {
    serde_json::from_value(serde_json::Value::String(id.to_string()))
        .map_err(|_| JsError::new(&format!("Unknown strategy: {}", id)))
}

/// Run the registry tournament
///
/// # Returns
/// JSON serialized TournamentResult
#[wasm_bindgen]
pub fn run_tournament_json(rounds: u32, seed: u64) -> Result<JsValue, JsError> {
    let config = TournamentConfig::new(rounds, seed);
    let result = run_tournament(&default_roster(), &config)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay a single game with full round-by-round details
///
/// # Arguments
/// * `kind_a` - Strategy id for player A, e.g. `"TitForTat"`
/// * `kind_b` - Strategy id for player B
/// * `rounds` - Rounds to play, at most `MAX_ROUNDS`
/// * `seed` - Seed for the Random strategy's coin flips
///
/// # Returns
/// JSON serialized GameResult
#[wasm_bindgen]
pub fn replay_game(kind_a: &str, kind_b: &str, rounds: u32, seed: u64) -> Result<JsValue, JsError> {
    if rounds > MAX_ROUNDS {
        return Err(JsError::new(&format!(
            "round count {} exceeds the maximum of {}",
            rounds, MAX_ROUNDS
        )));
    }
    let strategy_a = Strategy::from_kind(parse_kind(kind_a)?);
    let strategy_b = Strategy::from_kind(parse_kind(kind_b)?);

    let mut a = Player::for_game(&strategy_a, rounds);
    let mut b = Player::for_game(&strategy_b, rounds);
    let result = simulate_game(&mut a, &mut b, rounds, &SeededRng::new(seed, 0));

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay one pairing of the registry tournament
///
/// # Returns
/// JSON serialized GameResult, or `null` past the end of the schedule
#[wasm_bindgen]
pub fn replay_pairing_json(pairing_index: u32, rounds: u32, seed: u64) -> Result<JsValue, JsError> {
    let config = TournamentConfig::new(rounds, seed);
    let result = replay_pairing(&default_roster(), &config, pairing_index as usize)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: StrategyKind,
    name: &'static str,
    description: &'static str,
}

/// Get all available strategy types
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<_> = StrategyKind::ALL
        .iter()
        .map(|kind| StrategyInfo {
            id: *kind,
            name: kind.display_name(),
            description: kind.describe(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
