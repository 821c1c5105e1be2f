//! Balance source abstraction: where current wallet balances come from.

use async_trait::async_trait;
use std::fmt;

pub mod mock;
pub mod solana;

pub use mock::MockBalanceSource;
pub use solana::SolanaRpcSource;

/// Supplier of the current balance for a wallet.
///
/// Implementations own transport, retry and timeout concerns; the engine
/// only ever sees a plain SOL amount or an error it treats as "no
/// observation this tick".
#[async_trait]
pub trait BalanceSource: Send + Sync + fmt::Debug {
    /// Fetch the current balance for `wallet`, in SOL.
    async fn fetch_balance(&self, wallet: &str) -> Result<f64, BalanceSourceError>;
}

/// Error type for balance source operations.
#[derive(Debug, Clone)]
pub enum BalanceSourceError {
    /// Network error (connection refused, DNS failure, timeout)
    Network(String),
    /// HTTP-level error from the RPC endpoint
    Http { status: u16, message: String },
    /// Malformed or unexpected RPC payload
    Parse(String),
    /// Rate limit exceeded
    RateLimited,
}

impl fmt::Display for BalanceSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceSourceError::Network(msg) => write!(f, "Network error: {}", msg),
            BalanceSourceError::Http { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            BalanceSourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            BalanceSourceError::RateLimited => write!(f, "Rate limited"),
        }
    }
}

impl std::error::Error for BalanceSourceError {}
