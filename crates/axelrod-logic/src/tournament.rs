//! Round-robin tournament runner

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use crate::error::TournamentError;
use crate::game::{simulate_game, GameResult, DEFAULT_ROUNDS, MAX_ROUNDS};
use crate::pairing::{get_pairing, pairing_count, round_robin_pairings};
use crate::random::SeededRng;
use crate::strategy::{Player, Strategy, StrategyKind};

/// Tournament configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Rounds per pairing
    pub rounds: u32,
    /// Seed for the Random strategy's coin flips
    pub seed: u64,
}

impl TournamentConfig {
    pub fn new(rounds: u32, seed: u64) -> Self {
        Self { rounds, seed }
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seed: 0,
        }
    }
}

/// Total penalty of one participant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub total_penalty: u64,
}

/// Name → total penalty, in roster order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Standings {
    entries: Vec<Standing>,
}

impl Standings {
    /// One zeroed entry per participant
    fn zeroed(roster: &[Strategy]) -> Self {
        Self {
            entries: roster
                .iter()
                .map(|s| Standing {
                    name: s.name.clone(),
                    total_penalty: 0,
                })
                .collect(),
        }
    }

    fn add(&mut self, index: usize, penalty: u64) {
        self.entries[index].total_penalty += penalty;
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.total_penalty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Standing> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest total penalty; ties go to the earlier roster entry
    pub fn leader(&self) -> Option<&Standing> {
        self.entries.iter().reduce(|best, s| {
            if s.total_penalty < best.total_penalty {
                s
            } else {
                best
            }
        })
    }
}

/// Outcome of one pairing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRecord {
    pub index_a: usize,
    pub index_b: usize,
    pub name_a: String,
    pub name_b: String,
    pub penalty_a: u64,
    pub penalty_b: u64,
}

/// Result of a tournament
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub standings: Standings,
    /// Pairings in the order they were played
    pub pairings: Vec<PairingRecord>,
    pub rounds: u32,
    pub seed: u64,
}

/// The fixed registry, in presentation order
pub fn default_roster() -> Vec<Strategy> {
    StrategyKind::ALL
        .iter()
        .map(|kind| Strategy::from_kind(*kind))
        .collect()
}

fn validate(roster: &[Strategy], config: &TournamentConfig) -> Result<(), TournamentError> {
    if roster.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    if config.rounds == 0 {
        return Err(TournamentError::ZeroRounds);
    }
    if config.rounds > MAX_ROUNDS {
        return Err(TournamentError::TooManyRounds {
            requested: config.rounds,
            max: MAX_ROUNDS,
        });
    }
    let mut seen = HashSet::with_capacity(roster.len());
    for strategy in roster {
        if !seen.insert(strategy.name.as_str()) {
            return Err(TournamentError::DuplicateName(strategy.name.clone()));
        }
    }
    Ok(())
}

/// Both sides start from an empty history; the RNG stream is the pairing index
fn play_pairing(
    roster: &[Strategy],
    config: &TournamentConfig,
    pairing_index: usize,
    i: usize,
    j: usize,
) -> GameResult {
    let mut a = Player::for_game(&roster[i], config.rounds);
    let mut b = Player::for_game(&roster[j], config.rounds);
    let rng = SeededRng::new(config.seed, pairing_index as u32);
    simulate_game(&mut a, &mut b, config.rounds, &rng)
}

/// Replay one pairing of the tournament round by round
///
/// Returns `Ok(None)` when `pairing_index` is past the end of the schedule.
/// The totals equal the matching `PairingRecord` of `run_tournament` with
/// the same roster and config.
pub fn replay_pairing(
    roster: &[Strategy],
    config: &TournamentConfig,
    pairing_index: usize,
) -> Result<Option<GameResult>, TournamentError> {
    validate(roster, config)?;
    Ok(get_pairing(roster.len(), pairing_index)
        .map(|(i, j)| play_pairing(roster, config, pairing_index, i, j)))
}

/// Run a full round-robin tournament
///
/// Every pair `i < j` of the roster plays one game of `config.rounds`
/// rounds, starting from empty histories. Each participant's total is the
/// sum of its penalties over all the pairings it entered.
pub fn run_tournament(
    roster: &[Strategy],
    config: &TournamentConfig,
) -> Result<TournamentResult, TournamentError> {
    validate(roster, config)?;

    let mut standings = Standings::zeroed(roster);
    let mut pairings = Vec::with_capacity(pairing_count(roster.len()));

    for (pairing_index, (i, j)) in round_robin_pairings(roster.len()).enumerate() {
        let game = play_pairing(roster, config, pairing_index, i, j);
        standings.add(i, game.total_penalty_a);
        standings.add(j, game.total_penalty_b);

        tracing::debug!(
            a = %roster[i].name,
            b = %roster[j].name,
            penalty_a = game.total_penalty_a,
            penalty_b = game.total_penalty_b,
            "pairing finished"
        );

        pairings.push(PairingRecord {
            index_a: i,
            index_b: j,
            name_a: roster[i].name.clone(),
            name_b: roster[j].name.clone(),
            penalty_a: game.total_penalty_a,
            penalty_b: game.total_penalty_b,
        });
    }

    tracing::info!(
        participants = roster.len(),
        pairings = pairings.len(),
        rounds = config.rounds,
        "tournament complete"
    );

    Ok(TournamentResult {
        standings,
        pairings,
        rounds: config.rounds,
        seed: config.seed,
    })
}
