//! House pool bookkeeping and liquidity shares.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

/// One liquidity deposit into the house pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Depositor {
    /// Display name supplied with the deposit.
    pub name: String,
    /// Chips contributed.
    pub staked: u64,
    /// LP units minted for this deposit.
    pub units: f64,
}

/// The shared house bankroll backing player payouts.
///
/// Depositors own the pool fractionally: each deposit mints LP units at the
/// pool's current unit price, so a later depositor buys in at the pool's
/// current value rather than at par. Settlements move the total up and down,
/// and a long run of player wins can push it below zero; that state is
/// logged and reported through [`is_overdrawn`](Self::is_overdrawn) rather
/// than prevented.
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    /// Chips backing payouts. Negative when overdrawn.
    total: i64,
    /// LP units outstanding across all depositors.
    units: f64,
    /// Deposit records in deposit order.
    depositors: Vec<Depositor>,
}

impl Pool {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            units: 0.0,
            depositors: Vec::new(),
        }
    }

    /// Returns the chips currently backing payouts. Negative when overdrawn.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// Returns the LP units outstanding across all depositors.
    #[must_use]
    pub const fn units_outstanding(&self) -> f64 {
        self.units
    }

    /// Returns the current price of one LP unit: pool total over units
    /// outstanding.
    ///
    /// The price is 1.0 while no units exist, and again whenever the pool
    /// total is at or below zero, so a deposit into a drained pool re-primes
    /// it at par instead of minting negative units.
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        if self.units <= 0.0 || self.total <= 0 {
            return 1.0;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for chip totals"
        )]
        let total = self.total as f64;
        total / self.units
    }

    /// Deposits `amount` chips under `name`, minting LP units at the current
    /// unit price.
    ///
    /// Returns the units minted, or `None` with no state change for a zero
    /// amount or an empty name. A repeated name appends a fresh record; it is
    /// not merged with earlier deposits.
    pub fn deposit(&mut self, name: &str, amount: u64) -> Option<f64> {
        if amount == 0 || name.is_empty() {
            return None;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for chip amounts"
        )]
        let minted = amount as f64 / self.unit_price();

        #[expect(
            clippy::cast_possible_wrap,
            reason = "deposit amounts are bounded by chip balances and fit in i64"
        )]
        let chips = amount as i64;

        self.total += chips;
        self.units += minted;
        self.depositors.push(Depositor {
            name: String::from(name),
            staked: amount,
            units: minted,
        });

        log::info!("pool deposit: {name} staked {amount} for {minted} units");

        Some(minted)
    }

    /// Applies one settlement's signed chip movement: positive for a stake
    /// forfeited by the player, negative for winnings paid out. A payout may
    /// leave the pool negative, which is logged.
    pub(crate) fn apply(&mut self, delta: i64) {
        self.total += delta;

        if delta < 0 && self.total < 0 {
            log::warn!("house pool overdrawn: {} chips", self.total);
        }
    }

    /// Returns whether cumulative payouts have exceeded deposits.
    #[must_use]
    pub const fn is_overdrawn(&self) -> bool {
        self.total < 0
    }

    /// Returns all depositor records in deposit order.
    #[must_use]
    pub fn depositors(&self) -> &[Depositor] {
        &self.depositors
    }

    /// Returns the `n` largest depositors by contributed stake, earliest
    /// deposit first among ties.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&Depositor> {
        let mut ranked: Vec<&Depositor> = self.depositors.iter().collect();
        ranked.sort_by(|a, b| b.staked.cmp(&a.staked));
        ranked.truncate(n);
        ranked
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
