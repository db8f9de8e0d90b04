use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{Action, EngineError};
use crate::hand::Hand;
use crate::rules::TableRules;
use crate::shoe::Shoe;

/// Position of a round in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// How a resolved round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player went over 21; the dealer never plays.
    PlayerBust,
    /// Dealer went over 21 after policy play.
    DealerBust,
    PlayerWin,
    DealerWin,
    /// Equal totals, wager returned.
    Push,
}

impl Outcome {
    /// Outcomes that pay the wager to the player.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::PlayerWin | Outcome::DealerBust)
    }

    /// Outcomes that forfeit the wager.
    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::PlayerBust | Outcome::DealerWin)
    }
}

/// A single dealt round: one player hand, one dealer hand, one shoe.
/// Created in `PlayerTurn`, discarded after `Resolved`; never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    wager: u32,
    rules: TableRules,
    phase: Phase,
    revealed: bool,
    dealer_total_at_stand: Option<u8>,
    outcome: Option<Outcome>,
}

impl Round {
    /// Deal the opening hands in the fixed order player, player, dealer,
    /// dealer. The dealer's second card stays face-down until reveal.
    pub fn deal(mut shoe: Shoe, wager: u32, rules: &TableRules) -> Self {
        debug_assert!(shoe.remaining() >= 4, "shoe too short for the opening deal");

        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            if let Some(card) = shoe.draw() {
                player.push(card);
            }
        }
        for _ in 0..2 {
            if let Some(card) = shoe.draw() {
                dealer.push(card);
            }
        }

        Self {
            shoe,
            player,
            dealer,
            wager,
            rules: *rules,
            phase: Phase::PlayerTurn,
            revealed: false,
            dealer_total_at_stand: None,
            outcome: None,
        }
    }

    /// Draw one card for the player. Going over 21 resolves the round
    /// immediately as `PlayerBust`; the dealer does not play.
    pub fn hit(&mut self) -> Result<Option<Outcome>, EngineError> {
        if self.phase != Phase::PlayerTurn {
            return Err(EngineError::InvalidTransition {
                action: Action::Hit,
                phase: self.phase,
            });
        }

        // Unreachable with a fresh 52-card shoe; drawing nothing leaves
        // the hand as it stands.
        let Some(card) = self.shoe.draw() else {
            return Ok(None);
        };
        self.player.push(card);

        if self.player.is_busted() {
            self.resolve(Outcome::PlayerBust);
            return Ok(Some(Outcome::PlayerBust));
        }
        Ok(None)
    }

    /// End the player's turn: reveal the hole card, run the dealer policy
    /// to completion and resolve the outcome.
    pub fn stand(&mut self) -> Result<Outcome, EngineError> {
        if self.phase != Phase::PlayerTurn {
            return Err(EngineError::InvalidTransition {
                action: Action::Stand,
                phase: self.phase,
            });
        }

        self.dealer_total_at_stand = Some(self.dealer.total());
        self.revealed = true;
        self.phase = Phase::DealerTurn;
        Ok(self.play_dealer())
    }

    /// Dealer draws below the stand total and stands at or above it,
    /// soft totals included.
    pub fn dealer_should_draw(&self) -> bool {
        self.dealer.total() < self.rules.dealer_stand_total
    }

    /// Fixed dealer policy. An exhausted shoe stands with the current
    /// total rather than erroring.
    fn play_dealer(&mut self) -> Outcome {
        while self.dealer_should_draw() {
            match self.shoe.draw() {
                Some(card) => self.dealer.push(card),
                None => break,
            }
        }

        let outcome = if self.dealer.is_busted() {
            Outcome::DealerBust
        } else if self.dealer.total() > self.player.total() {
            Outcome::DealerWin
        } else if self.dealer.total() < self.player.total() {
            Outcome::PlayerWin
        } else {
            Outcome::Push
        };
        self.resolve(outcome);
        outcome
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.phase = Phase::Resolved;
        self.revealed = true;
        self.outcome = Some(outcome);
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn wager(&self) -> u32 {
        self.wager
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the dealer's hole card has been turned over.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// The dealer's face-up card.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    /// The dealer's two-card total snapshotted when the player stood.
    /// `None` if the round ended without a stand.
    pub fn dealer_total_at_stand(&self) -> Option<u8> {
        self.dealer_total_at_stand
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }
}
