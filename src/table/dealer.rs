use alloc::vec::Vec;

use crate::settlement::{HandResult, Outcome, RoundResult};

use super::{Phase, Table};

/// Dealer draws until reaching this total.
const DEALER_STANDS_AT: u8 = 17;

/// Compares a stood hand (at most 21) against the dealer's final total.
/// A dealer bust is a win for any valid player total.
pub(super) const fn showdown(player_total: u8, dealer_total: u8) -> Outcome {
    if dealer_total > 21 || player_total > dealer_total {
        Outcome::Win
    } else if player_total < dealer_total {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}

impl Table {
    /// Reveals the hole card and draws until the dealer holds 17 or better,
    /// stopping early only when the deck runs out.
    ///
    /// A hand already at 17 draws nothing, so running this once per side of
    /// a doubled-down round plays the dealer out exactly once.
    pub(super) fn dealer_play(&mut self) {
        self.round.dealer.reveal_hole();

        while self.round.dealer.value() < DEALER_STANDS_AT {
            let Some(card) = self.deck.draw_one() else {
                break;
            };

            self.round.dealer.add_card(card);
            log::debug!("dealer draws {card}, total {}", self.round.dealer.value());
        }
    }

    /// Closes the round: reveals the dealer, records the settlement, and
    /// moves to the settled phase.
    pub(super) fn conclude(&mut self, hands: Vec<HandResult>) {
        self.round.dealer.reveal_hole();

        let result = RoundResult {
            hands,
            dealer_total: self.round.dealer.value(),
            dealer_bust: self.round.dealer.is_bust(),
        };

        log::info!(
            "round over: dealer {}, net {}",
            result.dealer_total,
            result.net()
        );

        self.round.phase = Phase::Over { result };
    }
}
