//! Mock balance source for testing without network calls.

use super::{BalanceSource, BalanceSourceError};
use async_trait::async_trait;
use std::collections::HashMap;

/// Balance source that returns canned per-wallet values, or a scripted
/// failure.
#[derive(Debug, Clone, Default)]
pub struct MockBalanceSource {
    balances: HashMap<String, f64>,
    fail: bool,
}

impl MockBalanceSource {
    /// Create a mock with no balances; unknown wallets read as 0.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the balance returned for `wallet`.
    pub fn with_balance(mut self, wallet: &str, balance: f64) -> Self {
        self.balances.insert(wallet.to_string(), balance);
        self
    }

    /// Create a mock whose every fetch fails with a network error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl BalanceSource for MockBalanceSource {
    async fn fetch_balance(&self, wallet: &str) -> Result<f64, BalanceSourceError> {
        if self.fail {
            return Err(BalanceSourceError::Network("mock failure".to_string()));
        }
        Ok(self.balances.get(wallet).copied().unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_configured_balance() {
        let source = MockBalanceSource::new().with_balance("wallet-a", 42.5);
        assert_eq!(source.fetch_balance("wallet-a").await.unwrap(), 42.5);
    }

    #[tokio::test]
    async fn test_unknown_wallet_reads_zero() {
        let source = MockBalanceSource::new();
        assert_eq!(source.fetch_balance("wallet-b").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_failing_mock_errors() {
        let source = MockBalanceSource::failing();
        assert!(source.fetch_balance("wallet-a").await.is_err());
    }
}
