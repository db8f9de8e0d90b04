use blackjack_engine::{Hand, Outcome, Round, RoundSummary, SessionStats};

pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "Bust! You lose!",
        Outcome::DealerBust => "Dealer busts! You win!",
        Outcome::PlayerWin => "You win!",
        Outcome::DealerWin => "Dealer wins!",
        Outcome::Push => "Push! It's a tie!",
    }
}

fn hand_cards(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn total_tag(hand: &Hand) -> String {
    if hand.is_soft() {
        format!("(soft {})", hand.total())
    } else {
        format!("({})", hand.total())
    }
}

/// The dealer's row. While the hole card is down only the upcard shows,
/// with no total.
pub fn dealer_line(round: &Round) -> String {
    if round.revealed() {
        format!(
            "Dealer: {} {}",
            hand_cards(round.dealer()),
            total_tag(round.dealer())
        )
    } else {
        match round.dealer_upcard() {
            Some(up) => format!("Dealer: {up} ??"),
            None => "Dealer: --".to_string(),
        }
    }
}

pub fn player_line(round: &Round) -> String {
    format!(
        "You:    {} {}",
        hand_cards(round.player()),
        total_tag(round.player())
    )
}

pub fn summary_banner(summary: &RoundSummary) -> String {
    let mut lines = vec![
        outcome_line(summary.outcome).to_string(),
        format!("New Balance: ${}", summary.balance),
    ];
    if summary.streak > 0 {
        lines.push(format!("🔥 Win Streak: {} games!", summary.streak));
    }
    for achievement in &summary.achievements {
        lines.push(achievement.label().to_string());
    }
    lines.join("\n")
}

pub fn stats_screen(stats: &SessionStats) -> String {
    format!(
        "Game Statistics\n\
         ---------------\n\
         Games Played:   {}\n\
         Games Won:      {}\n\
         Games Lost:     {}\n\
         Pushes:         {}\n\
         Win Rate:       {:.1}%\n\
         Total Winnings: ${}\n\
         Biggest Win:    ${}\n\
         Best Streak:    {} consecutive wins",
        stats.games_played,
        stats.games_won,
        stats.games_lost,
        stats.games_pushed,
        stats.win_rate(),
        stats.total_winnings,
        stats.biggest_win,
        stats.best_streak,
    )
}

pub fn rules_screen() -> &'static str {
    "How to Play Blackjack\n\
     ---------------------\n\
     Objective: get as close to 21 as possible without going over, and\n\
     beat the dealer's hand.\n\
     \n\
     Card values: number cards count face value, J/Q/K count 10, and an\n\
     ace counts 1 or 11, whichever is better.\n\
     \n\
     Actions: hit draws another card, stand keeps your hand and lets the\n\
     dealer play. The dealer draws to 16 and stands on 17.\n\
     \n\
     You win by beating the dealer's total or when the dealer busts; a\n\
     push returns your wager."
}
