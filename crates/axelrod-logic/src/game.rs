//! Round and game execution engine

use serde::{Deserialize, Serialize};
use crate::random::{Entropy, SeededRng};
use crate::strategy::{Move, Player};
use crate::penalties;

/// Rounds per pairing unless configured otherwise
pub const DEFAULT_ROUNDS: u32 = 1000;

/// Largest round count a tournament accepts
pub const MAX_ROUNDS: u32 = 100_000;

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub penalty_a: u8,
    pub penalty_b: u8,
    pub cumulative_a: u64,
    pub cumulative_b: u64,
}

/// Result of a complete game between two players
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub rounds: Vec<RoundResult>,
    pub total_penalty_a: u64,
    pub total_penalty_b: u64,
    pub round_count: u32,
}

/// Play one round: both sides commit a move, get scored against the
/// other's move, then record the round in their own history.
///
/// Returns (penalty_a, penalty_b)
pub fn play_round(
    a: &mut Player<'_>,
    b: &mut Player<'_>,
    entropy_a: &mut dyn Entropy,
    entropy_b: &mut dyn Entropy,
) -> (u8, u8) {
    let (_, _, penalty_a, penalty_b) = exchange(a, b, entropy_a, entropy_b);
    (penalty_a, penalty_b)
}

fn exchange(
    a: &mut Player<'_>,
    b: &mut Player<'_>,
    entropy_a: &mut dyn Entropy,
    entropy_b: &mut dyn Entropy,
) -> (Move, Move, u8, u8) {
    // Decide simultaneously
    let move_a = a.decide(entropy_a);
    let move_b = b.decide(entropy_b);

    let (penalty_a, penalty_b) = penalties(move_a, move_b);

    a.update(move_a, move_b);
    b.update(move_b, move_a);

    (move_a, move_b, penalty_a, penalty_b)
}

/// Run a complete game between two players
///
/// # Arguments
/// * `a` - First player, normally fresh for this pairing
/// * `b` - Second player, normally fresh for this pairing
/// * `rounds` - Number of rounds to play
/// * `rng` - Game randomness; each side draws from its own per-round stream
///
/// # Returns
/// Complete game result with round-by-round details
pub fn simulate_game(
    a: &mut Player<'_>,
    b: &mut Player<'_>,
    rounds: u32,
    rng: &SeededRng,
) -> GameResult {
    let mut log: Vec<RoundResult> = Vec::with_capacity(rounds.min(MAX_ROUNDS) as usize);
    let mut total_a = 0u64;
    let mut total_b = 0u64;

    for round in 0..rounds {
        // Separate streams so one player's draws never shift the other's
        let mut rng_a = rng.for_round(round.wrapping_mul(2));
        let mut rng_b = rng.for_round(round.wrapping_mul(2).wrapping_add(1));

        let (move_a, move_b, penalty_a, penalty_b) = exchange(a, b, &mut rng_a, &mut rng_b);
        total_a += u64::from(penalty_a);
        total_b += u64::from(penalty_b);

        log.push(RoundResult {
            round,
            move_a,
            move_b,
            penalty_a,
            penalty_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });
    }

    GameResult {
        rounds: log,
        total_penalty_a: total_a,
        total_penalty_b: total_b,
        round_count: rounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Strategy, StrategyKind};

    fn play(kind_a: StrategyKind, kind_b: StrategyKind, rounds: u32) -> GameResult {
        let sa = Strategy::from_kind(kind_a);
        let sb = Strategy::from_kind(kind_b);
        let mut a = Player::for_game(&sa, rounds);
        let mut b = Player::for_game(&sb, rounds);
        simulate_game(&mut a, &mut b, rounds, &SeededRng::new(42, 0))
    }

    #[test]
    fn test_play_round_updates_both_histories() {
        let sa = Strategy::from_kind(StrategyKind::AlwaysCooperate);
        let sb = Strategy::from_kind(StrategyKind::AlwaysDefect);
        let mut a = Player::new(&sa);
        let mut b = Player::new(&sb);
        let mut rng_a = SeededRng::new(1, 0);
        let mut rng_b = SeededRng::new(1, 1);

        let (pa, pb) = play_round(&mut a, &mut b, &mut rng_a, &mut rng_b);
        assert_eq!((pa, pb), (10, 0));

        let ha = a.history().last().copied().unwrap();
        let hb = b.history().last().copied().unwrap();
        assert_eq!((ha.own, ha.opponent), (Move::Cooperate, Move::Defect));
        assert_eq!((hb.own, hb.opponent), (Move::Defect, Move::Cooperate));
    }

    #[test]
    fn test_history_length_tracks_rounds() {
        let sa = Strategy::from_kind(StrategyKind::TitForTat);
        let sb = Strategy::from_kind(StrategyKind::Random);
        let mut a = Player::new(&sa);
        let mut b = Player::new(&sb);

        let result = simulate_game(&mut a, &mut b, 37, &SeededRng::new(9, 0));
        assert_eq!(result.rounds.len(), 37);
        assert_eq!(a.history().len(), 37);
        assert_eq!(b.history().len(), 37);
    }

    #[test]
    fn test_zero_rounds() {
        let result = play(StrategyKind::TitForTat, StrategyKind::AlwaysDefect, 0);
        assert!(result.rounds.is_empty());
        assert_eq!(result.total_penalty_a, 0);
        assert_eq!(result.total_penalty_b, 0);
    }

    #[test]
    fn test_cooperate_vs_defect() {
        let n = 1000u64;
        let result = play(StrategyKind::AlwaysCooperate, StrategyKind::AlwaysDefect, n as u32);

        for round in &result.rounds {
            assert_eq!(round.move_a, Move::Cooperate);
            assert_eq!(round.move_b, Move::Defect);
            assert_eq!(round.penalty_a, 10);
            assert_eq!(round.penalty_b, 0);
        }

        assert_eq!(result.total_penalty_a, 10 * n);
        assert_eq!(result.total_penalty_b, 0);
    }

    #[test]
    fn test_cooperate_vs_cooperate() {
        let n = 250u64;
        let result = play(StrategyKind::AlwaysCooperate, StrategyKind::AlwaysCooperate, n as u32);

        assert_eq!(result.total_penalty_a, 3 * n);
        assert_eq!(result.total_penalty_b, 3 * n);
    }

    #[test]
    fn test_tft_vs_always_defect() {
        let n = 1000u64;
        let result = play(StrategyKind::TitForTat, StrategyKind::AlwaysDefect, n as u32);

        // Round 0: TFT cooperates, AD defects
        assert_eq!(result.rounds[0].move_a, Move::Cooperate);
        assert_eq!(result.rounds[0].move_b, Move::Defect);

        // Round 1+: TFT retaliates, both defect
        for round in result.rounds.iter().skip(1) {
            assert_eq!(round.move_a, Move::Defect);
            assert_eq!(round.move_b, Move::Defect);
        }

        assert_eq!(result.total_penalty_a, 10 + 7 * (n - 1));
        assert_eq!(result.total_penalty_b, 7 * (n - 1));
    }

    #[test]
    fn test_grim_trigger_vs_tft_never_defects() {
        for n in [1u64, 2, 10, 1000] {
            let result = play(StrategyKind::GrimTrigger, StrategyKind::TitForTat, n as u32);
            assert!(result
                .rounds
                .iter()
                .all(|r| r.move_a == Move::Cooperate && r.move_b == Move::Cooperate));
            assert_eq!(result.total_penalty_a, 3 * n);
            assert_eq!(result.total_penalty_b, 3 * n);
        }
    }

    #[test]
    fn test_grim_trigger_vs_always_defect() {
        let n = 100u64;
        let result = play(StrategyKind::GrimTrigger, StrategyKind::AlwaysDefect, n as u32);

        assert_eq!(result.rounds[0].move_a, Move::Cooperate);
        assert!(result.rounds.iter().skip(1).all(|r| r.move_a == Move::Defect));
        assert_eq!(result.total_penalty_a, 10 + 7 * (n - 1));
    }

    #[test]
    fn test_pavlov_vs_always_defect_alternates() {
        // C/D mismatch -> D; D/D match -> C; repeat
        let result = play(StrategyKind::Pavlov, StrategyKind::AlwaysDefect, 6);
        let moves: Vec<_> = result.rounds.iter().map(|r| r.move_a).collect();
        assert_eq!(
            moves,
            vec![
                Move::Cooperate,
                Move::Defect,
                Move::Cooperate,
                Move::Defect,
                Move::Cooperate,
                Move::Defect,
            ]
        );
        assert_eq!(result.total_penalty_a, 3 * 10 + 3 * 7);
    }

    #[test]
    fn test_game_determinism() {
        let r1 = play(StrategyKind::TitForTat, StrategyKind::Random, 500);
        let r2 = play(StrategyKind::TitForTat, StrategyKind::Random, 500);
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let sa = Strategy::from_kind(StrategyKind::Random);
        let sb = Strategy::from_kind(StrategyKind::Random);

        let run = |seed| {
            simulate_game(&mut Player::new(&sa), &mut Player::new(&sb), 64, &SeededRng::new(seed, 0))
        };
        let r1 = run(1);
        let r2 = run(2);

        // Not guaranteed but extremely likely over 64 rounds of coin flips
        let moves1: Vec<_> = r1.rounds.iter().map(|r| (r.move_a, r.move_b)).collect();
        let moves2: Vec<_> = r2.rounds.iter().map(|r| (r.move_a, r.move_b)).collect();
        assert_ne!(moves1, moves2);
    }

    #[test]
    fn test_cumulative_scores() {
        let result = play(StrategyKind::Pavlov, StrategyKind::Random, 200);

        let mut expected_a = 0u64;
        let mut expected_b = 0u64;

        for round in &result.rounds {
            expected_a += u64::from(round.penalty_a);
            expected_b += u64::from(round.penalty_b);
            assert_eq!(round.cumulative_a, expected_a);
            assert_eq!(round.cumulative_b, expected_b);
        }
        assert_eq!(result.total_penalty_a, expected_a);
        assert_eq!(result.total_penalty_b, expected_b);
    }

    #[test]
    fn test_longest_allowed_game() {
        let result = play(StrategyKind::AlwaysCooperate, StrategyKind::AlwaysDefect, MAX_ROUNDS);
        assert_eq!(result.rounds.len(), MAX_ROUNDS as usize);
        assert_eq!(result.total_penalty_a, 10 * u64::from(MAX_ROUNDS));
        assert_eq!(result.rounds.last().map(|r| r.cumulative_a), Some(result.total_penalty_a));
    }
}
