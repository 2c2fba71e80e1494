//! Outcomes, chip transfers, and round result records.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Result of one hand measured against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player wins: higher total, dealer bust, or a dealt 21.
    Win,
    /// Player loses: lower total, bust, or the dealer dealt 21.
    Lose,
    /// Tie, or both sides bust; the wager is returned.
    Push,
}

/// One sub-hand of a doubled-down pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The left sub-hand, built on the first card of the split pair.
    Left,
    /// The right sub-hand, built on the second card.
    Right,
}

/// Chip movement produced by settling one (sub-)hand.
///
/// The credit and the pool delta always account for the full stake: the
/// wagered amount ends up in exactly one of the player balance or the house
/// pool, never both and never neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Chips credited back to the player balance.
    pub player_credit: u64,
    /// Signed change to the house pool total.
    pub pool_delta: i64,
}

impl Transfer {
    /// Computes the movement for settling `stake` chips with `outcome`.
    ///
    /// A win returns the stake plus equal winnings drawn from the pool, a
    /// loss forfeits the stake to the pool, and a push hands the stake back
    /// with the pool untouched.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "stakes are bounded by chip balances and fit in i64"
    )]
    #[must_use]
    pub const fn for_outcome(outcome: Outcome, stake: u64) -> Self {
        match outcome {
            Outcome::Win => Self {
                player_credit: stake * 2,
                pool_delta: -(stake as i64),
            },
            Outcome::Lose => Self {
                player_credit: 0,
                pool_delta: stake as i64,
            },
            Outcome::Push => Self {
                player_credit: stake,
                pool_delta: 0,
            },
        }
    }
}

/// Settled record for one (sub-)hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandResult {
    /// Which sub-hand this settles, or `None` for an undoubled hand.
    pub side: Option<Side>,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The stake this hand had on the table.
    pub stake: u64,
    /// Chips returned to the player: stake plus winnings on a win, the stake
    /// alone on a push, nothing on a loss.
    pub payout: u64,
    /// The hand's final total.
    pub player_total: u8,
}

/// Final record of a settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// One entry per settled hand. A doubled-down round lists the left side
    /// first regardless of which side settled first.
    pub hands: Vec<HandResult>,
    /// The dealer's final total, hole card included.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Net chip movement for the player across the round: payouts minus
    /// stakes. Positive is profit.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "payout values are bounded by chip balances and fit in i64"
    )]
    #[must_use]
    pub fn net(&self) -> i64 {
        self.hands
            .iter()
            .map(|hand| hand.payout as i64 - hand.stake as i64)
            .sum()
    }
}
