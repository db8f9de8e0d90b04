use crate::card::Card;
use crate::hand::Hand;

/// Advisory for the opening two cards, from a simplified basic-strategy
/// table bucketed by player total and dealer upcard. `None` once the
/// player has hit. The dealer's ace counts as 1 for the lookup, and
/// unmapped spots fall back to a generic answer.
pub fn strategy_hint(player: &Hand, dealer_upcard: Card) -> Option<&'static str> {
    if player.len() != 2 {
        return None;
    }

    let total = player.total();
    let up = if dealer_upcard.is_ace() {
        1
    } else {
        dealer_upcard.hard_value()
    };

    let hint = if total <= 8 {
        "Always hit on 8 or less"
    } else if total == 9 && (3..=6).contains(&up) {
        "Double down on 9 vs dealer 3-6"
    } else if total == 10 && up <= 9 {
        "Double down on 10 vs dealer 2-9"
    } else if total == 11 {
        "Always double down on 11"
    } else if total == 12 && (4..=6).contains(&up) {
        "Stand on 12 vs dealer 4-6"
    } else if (13..=16).contains(&total) && up <= 6 {
        "Stand on 13-16 vs dealer 2-6"
    } else if total >= 17 {
        "Always stand on 17 or higher"
    } else if total == 12 && up >= 2 {
        "Hit on 12 vs dealer 2,3,7+"
    } else if (13..=16).contains(&total) && up >= 7 {
        "Hit on 13-16 vs dealer 7+"
    } else {
        "Use your judgment"
    };
    Some(hint)
}
