//! Wallet bridge for funded play.

use core::fmt;

use alloc::string::String;

use crate::error::WalletError;

/// A connected wallet's address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(pub String);

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// External signing boundary for real-money wagering.
///
/// The table calls [`sign_and_send`](Self::sign_and_send) before committing a
/// funded deal; the remaining methods exist for the embedding UI. The trait is
/// synchronous; an async signer belongs behind an adapter in the embedder.
pub trait WalletBridge {
    /// Connects the wallet and returns its address.
    ///
    /// # Errors
    ///
    /// Returns an error if the user rejects the connection or the provider is
    /// unreachable.
    fn connect(&mut self) -> Result<WalletAddress, WalletError>;

    /// Disconnects the wallet.
    fn disconnect(&mut self);

    /// Signs and submits a transfer of `amount`, returning whether it landed.
    ///
    /// `Ok(false)` reports a submission that did not succeed without raising
    /// an error; callers treat it the same as an error for gating purposes.
    ///
    /// # Errors
    ///
    /// Returns an error if the user rejects the signature, no wallet is
    /// connected, or the submission fails in transport.
    fn sign_and_send(&mut self, amount: u64) -> Result<bool, WalletError>;

    /// Queries the balance held at `address`, for display and pre-checks
    /// only. Never authoritative over the table's chip ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if no wallet is connected or the query fails.
    fn balance(&self, address: &WalletAddress) -> Result<u64, WalletError>;
}

/// A wallet bridge for free play: connects instantly and approves every
/// transfer without touching a chain.
#[derive(Debug, Clone, Default)]
pub struct OfflineWallet {
    connected: bool,
    lamports: u64,
}

impl OfflineWallet {
    /// Creates a disconnected offline wallet with an empty balance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connected: false,
            lamports: 0,
        }
    }

    /// Sets the balance the wallet reports.
    ///
    /// # Example
    ///
    /// ```
    /// use housejack::OfflineWallet;
    ///
    /// let wallet = OfflineWallet::new().with_balance(1_000_000);
    /// ```
    #[must_use]
    pub const fn with_balance(mut self, lamports: u64) -> Self {
        self.lamports = lamports;
        self
    }
}

impl WalletBridge for OfflineWallet {
    fn connect(&mut self) -> Result<WalletAddress, WalletError> {
        self.connected = true;
        Ok(WalletAddress(String::from("offline")))
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn sign_and_send(&mut self, _amount: u64) -> Result<bool, WalletError> {
        if self.connected {
            Ok(true)
        } else {
            Err(WalletError::NotConnected)
        }
    }

    fn balance(&self, _address: &WalletAddress) -> Result<u64, WalletError> {
        if self.connected {
            Ok(self.lamports)
        } else {
            Err(WalletError::NotConnected)
        }
    }
}
