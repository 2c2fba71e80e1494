//! A blackjack table engine with an LP-backed house pool and optional
//! `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow,
//! including betting, the deal, hits, stands, double-downs, and settlement
//! against a house pool funded by liquidity providers. Every state change
//! goes through [`Table::apply`], and [`Table::snapshot`] produces a
//! serializable view for an embedding UI.
//!
//! # Example
//!
//! ```
//! use housejack::{Action, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.apply(Action::Deposit { name: "alice".into(), amount: 500 });
//! table.apply(Action::Bet { amount: 25 });
//!
//! let view = table.snapshot();
//! assert_eq!(view.chips, 2475);
//! assert_eq!(view.table_stake, 25);
//! assert_eq!(view.pool.total, 500);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod pool;
pub mod settlement;
pub mod snapshot;
pub mod table;
pub mod wallet;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, card_value};
pub use deck::Deck;
pub use error::WalletError;
pub use hand::{DealerHand, Hand, hand_value};
pub use options::TableOptions;
pub use pool::{Depositor, Pool};
pub use settlement::{HandResult, Outcome, RoundResult, Side, Transfer};
pub use snapshot::{DealerView, HandView, PoolView, RoundView, SideView, TableView};
pub use table::{Action, Table};
pub use wallet::{OfflineWallet, WalletAddress, WalletBridge};
