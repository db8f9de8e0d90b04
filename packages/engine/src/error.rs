use thiserror::Error;

use crate::round::Phase;
use crate::store::StoreError;

/// A player action attempted against a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deal,
    Hit,
    Stand,
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Wager outside the table bounds or the bankroll.
    #[error("invalid wager {wager}: allowed range is {min}..={max}")]
    InvalidWager { wager: u32, min: u32, max: u32 },

    /// Action invoked in a phase that does not permit it. State is left
    /// unchanged.
    #[error("{action:?} is not allowed in the {phase:?} phase")]
    InvalidTransition { action: Action, phase: Phase },

    /// Hit, stand or hint with no round dealt.
    #[error("no round in progress")]
    NoRound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
