//! Table engine and session state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::options::TableOptions;
use crate::pool::Pool;
use crate::settlement::{HandResult, Outcome, RoundResult, Side, Transfer};

mod actions;
mod dealer;
mod round;

pub use actions::Action;
pub(crate) use round::{Phase, Round, SideHand};

/// A single-player blackjack table backed by the house pool.
///
/// The table owns the deck, the round, the player's chip balance, and the
/// pool. Commands arrive through [`apply`](Self::apply) or the individual
/// action methods; a command that is illegal in the current phase changes
/// nothing. [`snapshot`](Self::snapshot) projects the state for rendering.
#[derive(Debug)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// Live deck for the current round. Replaced with a fresh shuffle when a
    /// bet opens a round; tests may install a fixed order afterwards.
    pub deck: Deck,
    /// Current round.
    pub(crate) round: Round,
    /// Player chip balance.
    chips: u64,
    /// House pool.
    pool: Pool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with the given options and RNG seed.
    ///
    /// The player starts with `options.starting_chips` and the pool starts
    /// empty. A given seed reproduces every shuffle of the session.
    ///
    /// # Example
    ///
    /// ```
    /// use housejack::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.chips(), 2500);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::standard(),
            round: Round::idle(),
            chips: options.starting_chips,
            pool: Pool::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the player's chip balance.
    #[must_use]
    pub const fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the house pool.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Returns the chips currently displayed on the table.
    #[must_use]
    pub const fn table_stake(&self) -> u64 {
        self.round.table_stake()
    }

    /// Returns the settlement record of the last round, if the round just
    /// played has settled and no new bet has been placed since.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        if let Phase::Over { result } = &self.round.phase {
            Some(result)
        } else {
            None
        }
    }

    /// Returns whether a bet may be placed now.
    #[must_use]
    pub const fn can_bet(&self) -> bool {
        matches!(self.round.phase, Phase::Idle | Phase::Over { .. })
    }

    /// Returns whether the opening hands may be dealt now.
    #[must_use]
    pub const fn can_deal(&self) -> bool {
        matches!(self.round.phase, Phase::Bet { .. })
    }

    /// Returns whether the addressed hand may hit now. `None` addresses the
    /// single hand, `Some` one side of a doubled-down pair.
    #[must_use]
    pub const fn can_hit(&self, side: Option<Side>) -> bool {
        match (&self.round.phase, side) {
            (Phase::Player { .. }, None) => true,
            (Phase::Split { left, .. }, Some(Side::Left)) => left.is_live(),
            (Phase::Split { right, .. }, Some(Side::Right)) => right.is_live(),
            _ => false,
        }
    }

    /// Returns whether the addressed hand may stand now.
    #[must_use]
    pub const fn can_stand(&self, side: Option<Side>) -> bool {
        self.can_hit(side)
    }

    /// Returns whether the hand may be doubled down now: single-hand play on
    /// an equal-value pair, with the balance covering a second stake.
    #[must_use]
    pub fn can_double(&self) -> bool {
        match &self.round.phase {
            Phase::Player { stake, hand } => {
                hand.can_double() && self.chips >= *stake && self.deck.remaining() >= 2
            }
            _ => false,
        }
    }

    /// Returns whether the session may quit now. Quitting is refused while
    /// chips are on the table.
    #[must_use]
    pub const fn can_quit(&self) -> bool {
        matches!(self.round.phase, Phase::Idle | Phase::Over { .. })
    }

    /// Clears a finished or unopened round from the table. Ignored while
    /// chips are on the table.
    pub fn quit(&mut self) {
        if self.can_quit() {
            self.round = Round::idle();
        }
    }

    /// Moves one settled hand's chips and returns the record.
    ///
    /// The whole stake ends up in exactly one of the player balance or the
    /// pool; each hand passes through here exactly once.
    pub(crate) fn settle_hand(
        &mut self,
        side: Option<Side>,
        outcome: Outcome,
        stake: u64,
        player_total: u8,
    ) -> HandResult {
        let transfer = Transfer::for_outcome(outcome, stake);
        self.chips += transfer.player_credit;
        self.pool.apply(transfer.pool_delta);

        log::info!("settled {outcome:?}: stake {stake}, payout {}", transfer.player_credit);

        HandResult {
            side,
            outcome,
            stake,
            payout: transfer.player_credit,
            player_total,
        }
    }
}
