//! Serializable read-only views of the table.
//!
//! A [`TableView`] is a plain-data copy of everything an embedding UI may
//! show. It is built on demand by [`Table::snapshot`] and never leaks the
//! dealer's hole card: until the dealer reveals it, the card is absent from
//! the view entirely, not merely flagged as hidden.

use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::hand::{DealerHand, Hand};
use crate::pool::{Depositor, Pool};
use crate::settlement::{Outcome, RoundResult};
use crate::table::{Phase, Round, SideHand, Table};

/// What the player may see of the dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerView {
    /// The face-up card, if any cards have been dealt.
    pub up_card: Option<Card>,
    /// Every visible card: the full hand once the hole card is revealed,
    /// otherwise the up card alone.
    pub cards: Vec<Card>,
    /// Whether a hole card exists but is still face down.
    pub hole_hidden: bool,
    /// Score of the visible cards only.
    pub visible_total: u8,
}

impl DealerView {
    fn of(dealer: &DealerHand) -> Self {
        let revealed = dealer.is_hole_revealed();
        let cards = if revealed {
            dealer.cards().to_vec()
        } else {
            dealer.up_card().into_iter().copied().collect()
        };

        Self {
            up_card: dealer.up_card().copied(),
            cards,
            hole_hidden: !revealed && dealer.len() > 1,
            visible_total: dealer.visible_value(),
        }
    }
}

/// A player hand as shown to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Score of the hand.
    pub total: u8,
}

impl HandView {
    fn of(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            total: hand.value(),
        }
    }
}

/// One side of a doubled-down round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideView {
    /// The side's hand.
    pub hand: HandView,
    /// Chips staked on this side.
    pub stake: u64,
    /// The side's outcome, once it has settled.
    pub outcome: Option<Outcome>,
}

impl SideView {
    fn of(side: &SideHand) -> Self {
        Self {
            hand: HandView::of(&side.hand),
            stake: side.stake,
            outcome: side.result.map(|result| result.outcome),
        }
    }
}

/// The round as shown to the UI, one variant per phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RoundView {
    /// No round is open.
    Idle,
    /// A bet is placed and the deal is pending.
    Bet {
        /// Chips staked on the round.
        stake: u64,
    },
    /// The player is acting on a single hand.
    Player {
        /// Chips staked on the round.
        stake: u64,
        /// The player's hand.
        hand: HandView,
        /// The dealer's visible cards.
        dealer: DealerView,
    },
    /// The player is acting on two doubled-down hands.
    Split {
        /// The left side, made from the first card of the pair.
        left: SideView,
        /// The right side, made from the second card of the pair.
        right: SideView,
        /// The dealer's visible cards.
        dealer: DealerView,
    },
    /// The round is settled.
    Over {
        /// Per-hand results and the dealer's final standing.
        result: RoundResult,
        /// The dealer's cards, hole card included.
        dealer: DealerView,
    },
}

impl RoundView {
    fn of(round: &Round) -> Self {
        let dealer = DealerView::of(&round.dealer);

        match &round.phase {
            Phase::Idle => Self::Idle,
            Phase::Bet { stake } => Self::Bet { stake: *stake },
            Phase::Player { stake, hand } => Self::Player {
                stake: *stake,
                hand: HandView::of(hand),
                dealer,
            },
            Phase::Split { left, right } => Self::Split {
                left: SideView::of(left),
                right: SideView::of(right),
                dealer,
            },
            Phase::Over { result } => Self::Over {
                result: result.clone(),
                dealer,
            },
        }
    }
}

/// The house pool as shown to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolView {
    /// Current pool balance in chips. Negative when overdrawn.
    pub total: i64,
    /// Chips one LP unit is currently worth.
    pub unit_price: f64,
    /// Whether the pool balance has gone negative.
    pub overdrawn: bool,
    /// Every recorded deposit, in deposit order.
    pub depositors: Vec<Depositor>,
}

impl PoolView {
    fn of(pool: &Pool) -> Self {
        Self {
            total: pool.total(),
            unit_price: pool.unit_price(),
            overdrawn: pool.is_overdrawn(),
            depositors: pool.depositors().to_vec(),
        }
    }
}

/// A full serializable view of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    /// The player's chip balance.
    pub chips: u64,
    /// Chips currently staked on the table across all hands.
    pub table_stake: u64,
    /// The round, shaped by its phase.
    pub round: RoundView,
    /// The house pool.
    pub pool: PoolView,
}

impl Table {
    /// Builds a serializable view of the table for display.
    ///
    /// # Example
    ///
    /// ```
    /// use housejack::{RoundView, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 7);
    /// let view = table.snapshot();
    /// assert_eq!(view.chips, 2500);
    /// assert!(matches!(view.round, RoundView::Idle));
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> TableView {
        TableView {
            chips: self.chips(),
            table_stake: self.table_stake(),
            round: RoundView::of(&self.round),
            pool: PoolView::of(self.pool()),
        }
    }
}
