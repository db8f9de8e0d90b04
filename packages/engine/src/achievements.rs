use serde::{Deserialize, Serialize};

use crate::round::Round;
use crate::stats::SessionStats;

/// One-shot notifications evaluated after a winning round. Purely
/// observational; nothing here feeds back into game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Achievement {
    /// First game ever won.
    FirstVictory,
    /// Win streak reached 3.
    HotStreak,
    /// Win streak reached 5.
    OnFire,
    /// Win streak reached 10.
    Unstoppable,
    /// Won with a wager of at least 200.
    BigSpender,
    /// Won with a wager of at least 500.
    HighRoller,
    /// Won holding exactly 21.
    PerfectTwentyOne,
    /// Won despite trailing the dealer's visible total at stand time.
    Comeback,
}

impl Achievement {
    /// Banner text shown by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            Achievement::FirstVictory => "🎉 First Victory!",
            Achievement::HotStreak => "🔥 Hot Streak! (3 wins)",
            Achievement::OnFire => "🔥🔥 On Fire! (5 wins)",
            Achievement::Unstoppable => "🔥🔥🔥 Unstoppable! (10 wins)",
            Achievement::BigSpender => "💰 Big Spender!",
            Achievement::HighRoller => "💰💰 High Roller!",
            Achievement::PerfectTwentyOne => "🎯 Perfect 21!",
            Achievement::Comeback => "🔄 Comeback King!",
        }
    }

    /// Evaluate every predicate against the freshly updated stats and the
    /// round that just resolved. Empty unless the round was a win;
    /// several achievements may unlock at once.
    pub fn unlocked(stats: &SessionStats, round: &Round) -> Vec<Achievement> {
        let won = round.outcome().is_some_and(|o| o.is_win());
        if !won {
            return Vec::new();
        }

        let mut unlocked = Vec::new();

        if stats.games_won == 1 {
            unlocked.push(Achievement::FirstVictory);
        }

        match stats.current_streak {
            3 => unlocked.push(Achievement::HotStreak),
            5 => unlocked.push(Achievement::OnFire),
            10 => unlocked.push(Achievement::Unstoppable),
            _ => {}
        }

        if round.wager() >= 200 {
            unlocked.push(Achievement::BigSpender);
        }
        if round.wager() >= 500 {
            unlocked.push(Achievement::HighRoller);
        }

        if round.player().total() == 21 {
            unlocked.push(Achievement::PerfectTwentyOne);
        }

        // Behind the dealer's two-card total when standing, yet won.
        let behind_at_stand = round
            .dealer_total_at_stand()
            .is_some_and(|dealer| round.player().total() < dealer);
        if behind_at_stand {
            unlocked.push(Achievement::Comeback);
        }

        unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::round::{Outcome, Round};
    use crate::rules::TableRules;
    use crate::shoe::Shoe;

    fn rigged(cards: &[Rank], wager: u32) -> Round {
        let shoe = Shoe::from_cards(
            cards.iter().map(|&r| Card::new(r, Suit::Hearts)).collect(),
        );
        Round::deal(shoe, wager, &TableRules::default())
    }

    fn stats_after(round: &Round, prior: &mut SessionStats) {
        let outcome = round.outcome().expect("round resolved");
        prior.record(outcome, round.wager());
    }

    #[test]
    fn test_nothing_unlocks_on_a_loss() {
        // Player 19, dealer 20.
        let mut round = rigged(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Ten, Rank::Five], 500);
        round.stand().unwrap();
        assert_eq!(round.outcome(), Some(Outcome::DealerWin));

        let mut stats = SessionStats::default();
        stats_after(&round, &mut stats);
        assert!(Achievement::unlocked(&stats, &round).is_empty());
    }

    #[test]
    fn test_first_victory_and_wager_tiers() {
        // Player 20, dealer stands on 17.
        let mut round = rigged(&[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Seven, Rank::Five], 500);
        round.stand().unwrap();
        assert_eq!(round.outcome(), Some(Outcome::PlayerWin));

        let mut stats = SessionStats::default();
        stats_after(&round, &mut stats);

        let unlocked = Achievement::unlocked(&stats, &round);
        assert!(unlocked.contains(&Achievement::FirstVictory));
        assert!(unlocked.contains(&Achievement::BigSpender));
        assert!(unlocked.contains(&Achievement::HighRoller));
        assert!(!unlocked.contains(&Achievement::PerfectTwentyOne));
    }

    #[test]
    fn test_perfect_twenty_one() {
        // Player A+K = 21, dealer stands on 17.
        let mut round = rigged(&[Rank::Ace, Rank::King, Rank::Ten, Rank::Seven, Rank::Five], 100);
        round.stand().unwrap();
        assert_eq!(round.outcome(), Some(Outcome::PlayerWin));

        let mut stats = SessionStats::default();
        stats_after(&round, &mut stats);

        let unlocked = Achievement::unlocked(&stats, &round);
        assert!(unlocked.contains(&Achievement::PerfectTwentyOne));
    }

    #[test]
    fn test_comeback_via_dealer_bust() {
        // Player stands on 12 behind the dealer's 16; dealer draws a ten
        // and busts.
        let mut round = rigged(&[Rank::Ten, Rank::Two, Rank::Six, Rank::Ten, Rank::King], 100);
        round.stand().unwrap();
        assert_eq!(round.outcome(), Some(Outcome::DealerBust));

        let mut stats = SessionStats::default();
        stats_after(&round, &mut stats);

        let unlocked = Achievement::unlocked(&stats, &round);
        assert!(unlocked.contains(&Achievement::Comeback));
        assert!(unlocked.contains(&Achievement::FirstVictory));
    }

    #[test]
    fn test_no_comeback_when_ahead_at_stand() {
        // Player 19 ahead of the dealer's 16; dealer busts anyway.
        let mut round = rigged(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Ten, Rank::King], 100);
        round.stand().unwrap();
        assert_eq!(round.outcome(), Some(Outcome::DealerBust));

        let mut stats = SessionStats::default();
        stats_after(&round, &mut stats);

        assert!(!Achievement::unlocked(&stats, &round).contains(&Achievement::Comeback));
    }

    #[test]
    fn test_streak_milestones_fire_exactly_once() {
        let mut stats = SessionStats::default();
        for _ in 0..2 {
            stats.record(Outcome::PlayerWin, 100);
        }

        // Third straight win.
        let mut round = rigged(&[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Seven, Rank::Five], 100);
        round.stand().unwrap();
        stats_after(&round, &mut stats);
        assert_eq!(stats.current_streak, 3);
        assert!(Achievement::unlocked(&stats, &round).contains(&Achievement::HotStreak));

        // Fourth straight win: no streak badge.
        let mut round = rigged(&[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Seven, Rank::Five], 100);
        round.stand().unwrap();
        stats_after(&round, &mut stats);
        let unlocked = Achievement::unlocked(&stats, &round);
        assert!(!unlocked.contains(&Achievement::HotStreak));
        assert!(!unlocked.contains(&Achievement::OnFire));
    }
}
