//! Match Logic for the Axelrod Arena
//!
//! Core game logic for an Iterated Prisoner's Dilemma round-robin.
//! Scores are penalties: lower is better.
//! This crate is compiled to:
//! - Native (for the arena server)
//! - WASM (for in-browser tournament replay)

mod error;
mod random;
mod strategy;
mod game;
mod pairing;
mod tournament;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::TournamentError;
pub use random::{Entropy, SeededRng};
pub use strategy::{Exchange, History, Move, Player, Strategy, StrategyKind};
pub use game::{play_round, simulate_game, GameResult, RoundResult, DEFAULT_ROUNDS, MAX_ROUNDS};
pub use pairing::{get_pairing, pairing_count, round_robin_pairings};
pub use tournament::{
    default_roster, replay_pairing, run_tournament, PairingRecord, Standing, Standings,
    TournamentConfig, TournamentResult,
};

/// Penalty for one side of a round, given its own move and the opponent's
pub fn penalty(own: Move, opponent: Move) -> u8 {
    match (own, opponent) {
        (Move::Defect, Move::Defect) => 7,
        (Move::Defect, Move::Cooperate) => 0,
        (Move::Cooperate, Move::Defect) => 10,
        (Move::Cooperate, Move::Cooperate) => 3,
    }
}

/// Penalty table for the Prisoner's Dilemma
/// Returns (penalty_a, penalty_b)
pub fn penalties(a: Move, b: Move) -> (u8, u8) {
    (penalty(a, b), penalty(b, a))
}
