//! Error types for the wallet boundary.
//!
//! Illegal table actions are silent no-ops by contract, so the only fallible
//! surface in the crate is the external wallet bridge.

use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by a wallet bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user rejected the signature request.
    #[error("signature request rejected")]
    Rejected,
    /// No wallet is connected.
    #[error("no wallet connected")]
    NotConnected,
    /// The wallet or the network failed to process the request.
    #[error("wallet transport failure: {0}")]
    Transport(String),
}
