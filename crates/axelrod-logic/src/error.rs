//! Tournament input errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("tournament needs at least one participant")]
    EmptyRoster,

    #[error("participant name {0:?} appears more than once")]
    DuplicateName(String),

    #[error("round count must be positive")]
    ZeroRounds,

    #[error("round count {requested} exceeds the maximum of {max}")]
    TooManyRounds { requested: u32, max: u32 },
}
