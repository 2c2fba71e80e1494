use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::error::WalletError;
use crate::hand::Hand;
use crate::settlement::{HandResult, Outcome, Side};
use crate::wallet::WalletBridge;

use super::dealer::showdown;
use super::{Phase, Round, SideHand, Table};

/// A command driving the table.
///
/// Commands serialize, so an embedding UI can hand them over as data. A
/// command that is illegal in the current phase is ignored; the legality
/// predicates on [`Table`] mirror exactly what will be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Place `amount` chips and open a round.
    Bet {
        /// Chips to wager.
        amount: u64,
    },
    /// Deal the opening hands.
    Deal,
    /// Draw one card into the addressed hand.
    Hit {
        /// `None` for the single hand, `Some` for a doubled-down side.
        side: Option<Side>,
    },
    /// Freeze the addressed hand and play the dealer out.
    Stand {
        /// `None` for the single hand, `Some` for a doubled-down side.
        side: Option<Side>,
    },
    /// Double the wager and split the pair into two one-card hands.
    DoubleDown,
    /// Add liquidity to the house pool.
    Deposit {
        /// Depositor display name.
        name: String,
        /// Chips contributed.
        amount: u64,
    },
    /// Clear a finished or unopened round.
    Quit,
}

/// Dealt-21 evaluation shared by the opening deal and fresh split hands.
/// The dealer total includes the hole card.
const fn dealt_outcome(player_total: u8, dealer_total: u8) -> Option<Outcome> {
    match (player_total == 21, dealer_total == 21) {
        (true, true) => Some(Outcome::Push),
        (true, false) => Some(Outcome::Win),
        (false, true) => Some(Outcome::Lose),
        (false, false) => None,
    }
}

/// Outcome forced straight after a hit, if any: a both-bust push or a bust
/// loss. Anything else keeps the hand live.
const fn bust_outcome(player_total: u8, dealer_total: u8) -> Option<Outcome> {
    if player_total > 21 {
        if dealer_total > 21 {
            Some(Outcome::Push)
        } else {
            Some(Outcome::Lose)
        }
    } else {
        None
    }
}

impl Table {
    /// Applies one command to the table. Illegal commands change nothing.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Bet { amount } => self.bet(amount),
            Action::Deal => self.deal(),
            Action::Hit { side } => self.hit(side),
            Action::Stand { side } => self.stand(side),
            Action::DoubleDown => self.double_down(),
            Action::Deposit { name, amount } => {
                self.deposit(&name, amount);
            }
            Action::Quit => self.quit(),
        }
    }

    /// Places a bet and opens a round.
    ///
    /// The deck is rebuilt and reshuffled here, so the entire round draws
    /// from one fresh deck. Ignored unless the table is idle or settled, the
    /// amount meets the table minimum, and the balance covers it.
    pub fn bet(&mut self, amount: u64) {
        if !self.can_bet() || amount < self.options.min_bet || amount > self.chips {
            return;
        }

        self.chips -= amount;
        self.deck = Deck::shuffled(&mut self.rng);
        self.round = Round::opened(amount);

        log::debug!("bet placed: {amount} chips");
    }

    /// Deals two cards to the player, then two to the dealer, and checks the
    /// dealt-21 special cases against the dealer's full hand: both at 21 is
    /// a push, a player 21 wins on the spot, a dealer 21 loses on the spot.
    /// The hole card takes part in that check without being revealed.
    /// Ignored without an active bet.
    pub fn deal(&mut self) {
        let Phase::Bet { stake } = &self.round.phase else {
            return;
        };
        let stake = *stake;

        if self.deck.remaining() < 4 {
            return;
        }

        let Some(player_cards) = self.deck.draw(2) else {
            return;
        };
        let Some(dealer_cards) = self.deck.draw(2) else {
            return;
        };

        let hand = Hand::from_cards(player_cards);
        for card in dealer_cards {
            self.round.dealer.add_card(card);
        }

        log::debug!(
            "deal: player {}, dealer shows {}",
            hand.value(),
            self.round.dealer.visible_value()
        );

        if let Some(outcome) = dealt_outcome(hand.value(), self.round.dealer.value()) {
            let result = self.settle_hand(None, outcome, stake, hand.value());
            self.conclude(alloc::vec![result]);
            return;
        }

        self.round.phase = Phase::Player { stake, hand };
    }

    /// Deals with the wager first signed and sent through `wallet`.
    ///
    /// The deal is committed only when the wallet reports success; on
    /// `Ok(false)` or any error nothing changes and the caller may retry.
    /// Returns whether the deal was committed.
    ///
    /// # Errors
    ///
    /// Propagates wallet rejection, a missing connection, or a transport
    /// failure, with the round left exactly as it was.
    pub fn deal_funded(&mut self, wallet: &mut dyn WalletBridge) -> Result<bool, WalletError> {
        if !self.can_deal() {
            return Ok(false);
        }

        let stake = self.table_stake();
        if !wallet.sign_and_send(stake)? {
            log::info!("wallet declined transfer of {stake}; deal aborted");
            return Ok(false);
        }

        self.deal();
        Ok(!self.can_deal())
    }

    /// Draws one card into the addressed hand, then re-checks for a bust
    /// loss or a both-bust push. `None` addresses the single hand. Ignored
    /// when the addressed hand is not live; an exhausted deck leaves the
    /// state untouched.
    pub fn hit(&mut self, side: Option<Side>) {
        match (&self.round.phase, side) {
            (Phase::Player { .. }, None) => self.hit_single(),
            (Phase::Split { .. }, Some(chosen)) => self.hit_side(chosen),
            _ => {}
        }
    }

    fn hit_single(&mut self) {
        let Phase::Player { stake, hand } = &mut self.round.phase else {
            return;
        };
        let Some(card) = self.deck.draw_one() else {
            return;
        };

        hand.add_card(card);
        let player_total = hand.value();
        let stake = *stake;

        log::debug!("hit: drew {card}, total {player_total}");

        let dealer_total = self.round.dealer.value();
        if let Some(outcome) = bust_outcome(player_total, dealer_total) {
            let result = self.settle_hand(None, outcome, stake, player_total);
            self.conclude(alloc::vec![result]);
        }
    }

    fn hit_side(&mut self, side: Side) {
        if !self.can_hit(Some(side)) {
            return;
        }

        let Phase::Split { left, right } = &mut self.round.phase else {
            return;
        };
        let sub = match side {
            Side::Left => left,
            Side::Right => right,
        };
        let Some(card) = self.deck.draw_one() else {
            return;
        };

        sub.hand.add_card(card);
        let player_total = sub.hand.value();
        let stake = sub.stake;

        log::debug!("hit {side:?}: drew {card}, total {player_total}");

        let dealer_total = self.round.dealer.value();
        if let Some(outcome) = bust_outcome(player_total, dealer_total) {
            let result = self.settle_hand(Some(side), outcome, stake, player_total);
            self.record_side(side, result);
            self.conclude_if_split_done();
        }
    }

    /// Freezes the addressed hand, plays the dealer out, and settles by
    /// total comparison with the dealer-bust override. The dealer draw loop
    /// is a no-op once the dealer holds 17, so one doubled-down side
    /// standing after the other adds no further dealer cards. Ignored when
    /// the addressed hand is not live.
    pub fn stand(&mut self, side: Option<Side>) {
        match (&self.round.phase, side) {
            (Phase::Player { .. }, None) => self.stand_single(),
            (Phase::Split { .. }, Some(chosen)) => self.stand_side(chosen),
            _ => {}
        }
    }

    fn stand_single(&mut self) {
        let Phase::Player { stake, hand } = &self.round.phase else {
            return;
        };
        let stake = *stake;
        let player_total = hand.value();

        self.dealer_play();

        let outcome = showdown(player_total, self.round.dealer.value());
        let result = self.settle_hand(None, outcome, stake, player_total);
        self.conclude(alloc::vec![result]);
    }

    fn stand_side(&mut self, side: Side) {
        if !self.can_stand(Some(side)) {
            return;
        }

        let (stake, player_total) = {
            let Phase::Split { left, right } = &self.round.phase else {
                return;
            };
            let sub = match side {
                Side::Left => left,
                Side::Right => right,
            };
            (sub.stake, sub.hand.value())
        };

        self.dealer_play();

        let outcome = showdown(player_total, self.round.dealer.value());
        let result = self.settle_hand(Some(side), outcome, stake, player_total);
        self.record_side(side, result);
        self.conclude_if_split_done();
    }

    /// Doubles the wager on an eligible pair: a second equal stake goes on
    /// the table and the hand splits into left and right one-card hands,
    /// each drawing one card immediately. Each side is checked on the spot
    /// with the dealt-21 rules against the dealer's unchanged two cards;
    /// surviving sides play on independently and settle their own stake.
    /// Ignored unless eligible (see [`can_double`](Self::can_double)).
    pub fn double_down(&mut self) {
        if !self.can_double() {
            return;
        }

        let (stake, first, second) = {
            let Phase::Player { stake, hand } = &self.round.phase else {
                return;
            };
            let &[first, second] = hand.cards() else {
                return;
            };
            (*stake, first, second)
        };

        let Some(left_card) = self.deck.draw_one() else {
            return;
        };
        let Some(right_card) = self.deck.draw_one() else {
            return;
        };

        self.chips -= stake;

        let mut left = SideHand::new(Hand::from_cards(alloc::vec![first, left_card]), stake);
        let mut right = SideHand::new(Hand::from_cards(alloc::vec![second, right_card]), stake);

        log::debug!(
            "double down: left {}, right {}",
            left.hand.value(),
            right.hand.value()
        );

        let dealer_total = self.round.dealer.value();

        if let Some(outcome) = dealt_outcome(left.hand.value(), dealer_total) {
            let total = left.hand.value();
            left.result = Some(self.settle_hand(Some(Side::Left), outcome, stake, total));
        }
        if let Some(outcome) = dealt_outcome(right.hand.value(), dealer_total) {
            let total = right.hand.value();
            right.result = Some(self.settle_hand(Some(Side::Right), outcome, stake, total));
        }

        self.round.phase = Phase::Split { left, right };
        self.conclude_if_split_done();
    }

    /// Adds liquidity to the house pool under `name`. Accepted in any phase.
    ///
    /// Returns the LP units minted, or `None` if the pool rejected the
    /// deposit.
    pub fn deposit(&mut self, name: &str, amount: u64) -> Option<f64> {
        self.pool.deposit(name, amount)
    }

    const fn record_side(&mut self, side: Side, result: HandResult) {
        if let Phase::Split { left, right } = &mut self.round.phase {
            match side {
                Side::Left => left.result = Some(result),
                Side::Right => right.result = Some(result),
            }
        }
    }

    fn conclude_if_split_done(&mut self) {
        let Phase::Split { left, right } = &self.round.phase else {
            return;
        };

        if let (Some(left_result), Some(right_result)) = (left.result, right.result) {
            self.conclude(alloc::vec![left_result, right_result]);
        }
    }
}
