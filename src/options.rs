//! Table configuration options.

/// Configuration options for a table session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use housejack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(5000)
///     .with_min_bet(25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips granted to the player when the session opens.
    pub starting_chips: u64,
    /// Smallest bet the table accepts.
    pub min_bet: u64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 2500,
            min_bet: 5,
        }
    }
}

impl TableOptions {
    /// Sets the chips granted when the session opens.
    ///
    /// # Example
    ///
    /// ```
    /// use housejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(10_000);
    /// assert_eq!(options.starting_chips, 10_000);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u64) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the smallest bet the table accepts.
    ///
    /// # Example
    ///
    /// ```
    /// use housejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(100);
    /// assert_eq!(options.min_bet, 100);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet;
        self
    }
}
