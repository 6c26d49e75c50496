//! Strategy definitions and execution

use serde::{Deserialize, Serialize};
use crate::game::MAX_ROUNDS;
use crate::random::Entropy;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

/// Strategy variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Cooperate until opponent defects once, then always defect.
    GrimTrigger,
    /// Coin flip each round.
    Random,
    /// Win-stay, lose-shift. Cooperate when the last moves matched.
    Pavlov,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::AlwaysCooperate,
        StrategyKind::AlwaysDefect,
        StrategyKind::TitForTat,
        StrategyKind::GrimTrigger,
        StrategyKind::Random,
        StrategyKind::Pavlov,
    ];

    /// Registry display name
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::AlwaysCooperate => "Always Cooperate",
            StrategyKind::AlwaysDefect => "Always Defect",
            StrategyKind::TitForTat => "Tit for Tat",
            StrategyKind::GrimTrigger => "Grim Trigger",
            StrategyKind::Random => "Random",
            StrategyKind::Pavlov => "Pavlov",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            StrategyKind::AlwaysCooperate => "Never defects. Always cooperates.",
            StrategyKind::AlwaysDefect => "Never cooperates. Always defects.",
            StrategyKind::TitForTat => "Copies opponent's last move. Starts by cooperating.",
            StrategyKind::GrimTrigger => "Cooperates until betrayed once, then always defects.",
            StrategyKind::Random => "Cooperates or defects with equal probability each round.",
            StrategyKind::Pavlov => "Cooperates if both players made the same move last round.",
        }
    }
}

/// A tournament participant: a unique name and the behavior behind it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    pub kind: StrategyKind,
}

impl Strategy {
    pub fn new(name: impl Into<String>, kind: StrategyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Participant named after its registry entry
    pub fn from_kind(kind: StrategyKind) -> Self {
        Self::new(kind.display_name(), kind)
    }
}

/// One entry of a player's history, seen from that player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub own: Move,
    pub opponent: Move,
}

/// Moves recorded during the current pairing, oldest first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    exchanges: Vec<Exchange>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rounds: usize) -> Self {
        Self {
            exchanges: Vec::with_capacity(rounds),
        }
    }

    pub fn push(&mut self, own: Move, opponent: Move) {
        self.exchanges.push(Exchange { own, opponent });
    }

    pub fn last(&self) -> Option<&Exchange> {
        self.exchanges.last()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn as_slice(&self) -> &[Exchange] {
        &self.exchanges
    }
}

/// Per-pairing state of one participant
///
/// Built fresh at the start of every pairing, so history never leaks from
/// one opponent to the next.
#[derive(Clone, Debug)]
pub struct Player<'a> {
    strategy: &'a Strategy,
    history: History,
    triggered: bool,
}

impl<'a> Player<'a> {
    pub fn new(strategy: &'a Strategy) -> Self {
        Self {
            strategy,
            history: History::new(),
            triggered: false,
        }
    }

    /// Player with room reserved for a game of `rounds` rounds, up to `MAX_ROUNDS`
    pub fn for_game(strategy: &'a Strategy, rounds: u32) -> Self {
        Self {
            strategy,
            history: History::with_capacity(rounds.min(MAX_ROUNDS) as usize),
            triggered: false,
        }
    }

    pub fn strategy(&self) -> &'a Strategy {
        self.strategy
    }

    pub fn name(&self) -> &'a str {
        &self.strategy.name
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Choose this round's move
    pub fn decide(&mut self, entropy: &mut dyn Entropy) -> Move {
        match self.strategy.kind {
            StrategyKind::AlwaysCooperate => Move::Cooperate,
            StrategyKind::AlwaysDefect => Move::Defect,
            StrategyKind::TitForTat => decide_tit_for_tat(&self.history),
            StrategyKind::GrimTrigger => decide_grim_trigger(&self.history, &mut self.triggered),
            StrategyKind::Random => decide_random(entropy),
            StrategyKind::Pavlov => decide_pavlov(&self.history),
        }
    }

    /// Record a finished round
    pub fn update(&mut self, own: Move, opponent: Move) {
        self.history.push(own, opponent);
    }
}

/// Tit-for-Tat: Copy opponent's last move, start with cooperate
fn decide_tit_for_tat(history: &History) -> Move {
    match history.last() {
        None => Move::Cooperate,
        Some(last) => last.opponent,
    }
}

/// Grim Trigger: the flag is one-way and flips in the same call that
/// sees the opponent's defection.
fn decide_grim_trigger(history: &History, triggered: &mut bool) -> Move {
    if *triggered {
        return Move::Defect;
    }
    match history.last() {
        Some(last) if last.opponent == Move::Defect => {
            *triggered = true;
            Move::Defect
        }
        _ => Move::Cooperate,
    }
}

fn decide_random(entropy: &mut dyn Entropy) -> Move {
    if entropy.coin_flip() {
        Move::Cooperate
    } else {
        Move::Defect
    }
}

/// Pavlov: cooperate after a matched round, defect after a mismatched one
fn decide_pavlov(history: &History) -> Move {
    match history.last() {
        None => Move::Cooperate,
        Some(last) if last.own == last.opponent => Move::Cooperate,
        Some(_) => Move::Defect,
    }
}
