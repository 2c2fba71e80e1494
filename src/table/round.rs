//! Round phases and sub-hand records.

use crate::hand::{DealerHand, Hand};
use crate::settlement::{HandResult, RoundResult};

/// One sub-hand of a doubled-down pair, carrying its own stake.
#[derive(Debug, Clone)]
pub struct SideHand {
    /// The cards.
    pub hand: Hand,
    /// Chips this side has on the table.
    pub stake: u64,
    /// Set once the side settles; a settled side takes no further actions.
    pub result: Option<HandResult>,
}

impl SideHand {
    pub const fn new(hand: Hand, stake: u64) -> Self {
        Self {
            hand,
            stake,
            result: None,
        }
    }

    /// Returns whether this side can still act.
    pub const fn is_live(&self) -> bool {
        self.result.is_none()
    }
}

/// Where the round stands between commands.
///
/// Dealer auto-play runs synchronously inside the stand and double-down
/// transitions, so no dealer phase is ever observable from outside.
#[derive(Debug, Clone)]
pub enum Phase {
    /// No round in progress.
    Idle,
    /// A bet is on the table, cards not yet dealt.
    Bet {
        /// Chips wagered.
        stake: u64,
    },
    /// Single-hand play.
    Player {
        /// Chips wagered.
        stake: u64,
        /// The player's hand.
        hand: Hand,
    },
    /// Doubled-down play on two independent sub-hands.
    Split {
        /// Sub-hand built on the first card of the split pair.
        left: SideHand,
        /// Sub-hand built on the second card.
        right: SideHand,
    },
    /// The round has settled.
    Over {
        /// Final settlement record.
        result: RoundResult,
    },
}

/// A single round against the house.
#[derive(Debug, Clone)]
pub struct Round {
    /// Current phase.
    pub phase: Phase,
    /// The dealer's hand; empty until the deal.
    pub dealer: DealerHand,
}

impl Round {
    /// A round with nothing on the table.
    pub const fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            dealer: DealerHand::new(),
        }
    }

    /// Opens a round with `stake` chips on the table.
    pub const fn opened(stake: u64) -> Self {
        Self {
            phase: Phase::Bet { stake },
            dealer: DealerHand::new(),
        }
    }

    /// Chips shown on the table: the live wager, with both sides' stakes
    /// displayed until the whole doubled round completes.
    pub const fn table_stake(&self) -> u64 {
        match &self.phase {
            Phase::Idle | Phase::Over { .. } => 0,
            Phase::Bet { stake } | Phase::Player { stake, .. } => *stake,
            Phase::Split { left, right } => left.stake + right.stake,
        }
    }
}
