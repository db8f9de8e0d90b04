use rand::Rng;

use crate::achievements::Achievement;
use crate::error::{Action, EngineError};
use crate::round::{Outcome, Phase, Round};
use crate::rules::TableRules;
use crate::shoe::Shoe;
use crate::stats::SessionStats;
use crate::store::StatsStore;
use crate::strategy::strategy_hint;

/// What a resolved round reports back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub wager: u32,
    pub player_total: u8,
    pub dealer_total: u8,
    pub balance: u32,
    pub streak: u32,
    pub achievements: Vec<Achievement>,
}

/// Owns the bankroll, the statistics and the single round in flight.
/// Statistics are read from the store when the session opens and written
/// exactly once per resolved round; there is never more than one round
/// in play.
pub struct Session<S: StatsStore> {
    store: S,
    rules: TableRules,
    stats: SessionStats,
    balance: u32,
    round: Option<Round>,
}

impl<S: StatsStore> Session<S> {
    /// Open a session at the default table, loading saved statistics and
    /// bankroll or starting fresh.
    pub fn open(store: S) -> Result<Self, EngineError> {
        Self::with_rules(store, TableRules::default())
    }

    pub fn with_rules(store: S, rules: TableRules) -> Result<Self, EngineError> {
        let stats = store.load_stats()?.unwrap_or_default();
        let balance = store.load_balance()?.unwrap_or(rules.starting_balance);
        Ok(Self {
            store,
            rules,
            stats,
            balance,
            round: None,
        })
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Deal a new round from a freshly shuffled shoe.
    pub fn start_round<R: Rng>(&mut self, wager: u32, rng: &mut R) -> Result<&Round, EngineError> {
        self.start_round_from_shoe(wager, Shoe::shuffled(rng))
    }

    /// Deal a new round from a prepared shoe. For replays and tests; the
    /// same validation and lifecycle rules apply.
    pub fn start_round_from_shoe(&mut self, wager: u32, shoe: Shoe) -> Result<&Round, EngineError> {
        if let Some(round) = &self.round {
            if round.phase() != Phase::Resolved {
                return Err(EngineError::InvalidTransition {
                    action: Action::Deal,
                    phase: round.phase(),
                });
            }
        }
        self.rules.validate_wager(wager, self.balance)?;

        let round = Round::deal(shoe, wager, &self.rules);
        Ok(&*self.round.insert(round))
    }

    /// Draw one card for the player. Returns the settled summary when the
    /// draw busts the hand, `None` while the turn continues.
    pub fn hit(&mut self) -> Result<Option<RoundSummary>, EngineError> {
        let round = self.round.as_mut().ok_or(EngineError::NoRound)?;
        match round.hit()? {
            Some(outcome) => self.settle(outcome).map(Some),
            None => Ok(None),
        }
    }

    /// End the player's turn, run the dealer and settle the round.
    pub fn stand(&mut self) -> Result<RoundSummary, EngineError> {
        let round = self.round.as_mut().ok_or(EngineError::NoRound)?;
        let outcome = round.stand()?;
        self.settle(outcome)
    }

    /// Advisory for the opening two cards of the current round.
    pub fn hint(&self) -> Option<&'static str> {
        let round = self.round.as_ref()?;
        if round.phase() != Phase::PlayerTurn {
            return None;
        }
        strategy_hint(round.player(), round.dealer_upcard()?)
    }

    /// Discard any round in flight. Abandoned rounds are not scored.
    pub fn abandon(&mut self) {
        self.round = None;
    }

    /// The one-per-round bookkeeping step: fold the outcome into the
    /// statistics and bankroll, check achievements, persist.
    fn settle(&mut self, outcome: Outcome) -> Result<RoundSummary, EngineError> {
        let round = self.round.as_ref().ok_or(EngineError::NoRound)?;

        self.stats.record(outcome, round.wager());
        if outcome.is_win() {
            self.balance += round.wager();
        } else if outcome.is_loss() {
            self.balance -= round.wager();
        }

        let achievements = Achievement::unlocked(&self.stats, round);

        self.store.save_stats(&self.stats)?;
        self.store.save_balance(self.balance)?;

        Ok(RoundSummary {
            outcome,
            wager: round.wager(),
            player_total: round.player().total(),
            dealer_total: round.dealer().total(),
            balance: self.balance,
            streak: self.stats.current_streak,
            achievements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::store::MemoryStore;

    fn shoe(ranks: &[Rank]) -> Shoe {
        Shoe::from_cards(ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect())
    }

    #[test]
    fn test_open_defaults() {
        let session = Session::open(MemoryStore::default()).unwrap();
        assert_eq!(session.balance(), 1000);
        assert_eq!(session.stats().games_played, 0);
        assert!(session.round().is_none());
    }

    #[test]
    fn test_open_restores_saved_state() {
        let mut store = MemoryStore::default();
        let mut stats = SessionStats::default();
        stats.games_played = 7;
        store.save_stats(&stats).unwrap();
        store.save_balance(650).unwrap();

        let session = Session::open(store).unwrap();
        assert_eq!(session.balance(), 650);
        assert_eq!(session.stats().games_played, 7);
    }

    #[test]
    fn test_wager_is_validated_defensively() {
        let mut session = Session::open(MemoryStore::default()).unwrap();

        let err = session
            .start_round_from_shoe(10, shoe(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidWager { wager: 10, min: 50, max: 500 }));
        assert!(session.round().is_none());
    }

    #[test]
    fn test_no_second_round_while_one_is_live() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Seven, Rank::Five]),
            )
            .unwrap();

        let err = session
            .start_round_from_shoe(100, shoe(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidTransition { action: Action::Deal, phase: Phase::PlayerTurn }
        ));
    }

    #[test]
    fn test_win_pays_the_wager() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        // Player 20 beats the dealer's 17.
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Seven, Rank::Five]),
            )
            .unwrap();

        let summary = session.stand().unwrap();
        assert_eq!(summary.outcome, Outcome::PlayerWin);
        assert_eq!(summary.balance, 1100);
        assert_eq!(summary.streak, 1);
        assert_eq!(session.balance(), 1100);
        assert_eq!(session.stats().games_won, 1);
    }

    #[test]
    fn test_loss_forfeits_the_wager() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        // Player 19, dealer draws to 21.
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Ten, Rank::Five]),
            )
            .unwrap();

        let summary = session.stand().unwrap();
        assert_eq!(summary.outcome, Outcome::DealerWin);
        assert_eq!(summary.balance, 900);
        assert_eq!(summary.streak, 0);
        assert_eq!(session.stats().games_lost, 1);
    }

    #[test]
    fn test_push_leaves_the_balance() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Nine, Rank::Five]),
            )
            .unwrap();

        let summary = session.stand().unwrap();
        assert_eq!(summary.outcome, Outcome::Push);
        assert_eq!(summary.balance, 1000);
        assert_eq!(session.stats().games_pushed, 1);
    }

    #[test]
    fn test_bust_settles_through_hit() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Ten, Rank::Five]),
            )
            .unwrap();

        let summary = session.hit().unwrap().expect("bust settles the round");
        assert_eq!(summary.outcome, Outcome::PlayerBust);
        assert_eq!(summary.balance, 900);
        assert_eq!(session.stats().games_lost, 1);
    }

    #[test]
    fn test_actions_without_a_round() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        assert!(matches!(session.hit(), Err(EngineError::NoRound)));
        assert!(matches!(session.stand(), Err(EngineError::NoRound)));
        assert!(session.hint().is_none());
    }

    #[test]
    fn test_hit_after_resolution_changes_nothing() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Seven, Rank::Five]),
            )
            .unwrap();
        session.stand().unwrap();

        let err = session.hit().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidTransition { action: Action::Hit, phase: Phase::Resolved }
        ));
        assert_eq!(session.balance(), 1100);
        assert_eq!(session.stats().games_played, 1);
    }

    #[test]
    fn test_resolved_round_allows_the_next_deal() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Seven, Rank::Five]),
            )
            .unwrap();
        session.stand().unwrap();

        assert!(session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Seven, Rank::Five]),
            )
            .is_ok());
    }

    #[test]
    fn test_abandoned_round_is_not_scored() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Ten, Rank::Five]),
            )
            .unwrap();

        session.abandon();
        assert!(session.round().is_none());
        assert_eq!(session.balance(), 1000);
        assert_eq!(session.stats().games_played, 0);
    }

    #[test]
    fn test_hint_follows_the_round_lifecycle() {
        let mut session = Session::open(MemoryStore::default()).unwrap();
        session
            .start_round_from_shoe(
                100,
                shoe(&[Rank::Ten, Rank::Six, Rank::King, Rank::Seven, Rank::Two, Rank::Five]),
            )
            .unwrap();

        assert_eq!(session.hint(), Some("Hit on 13-16 vs dealer 7+"));

        // After a hit the hand is three cards; no more advisories.
        session.hit().unwrap();
        assert!(session.hint().is_none());
    }
}
