//! Solana JSON-RPC balance fetcher.

use super::{BalanceSource, BalanceSourceError};
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const LAMPORTS_PER_SOL: f64 = 1e9;

/// Balance source backed by a Solana RPC node's `getBalance` method.
#[derive(Debug, Clone)]
pub struct SolanaRpcSource {
    client: Client,
    rpc_url: String,
    timeout: Duration,
}

impl SolanaRpcSource {
    /// Create a source against `rpc_url`. `timeout` bounds each request
    /// and the total retry budget.
    pub fn new(rpc_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            rpc_url,
            timeout,
        }
    }

    async fn get_balance_lamports(&self, wallet: &str) -> Result<u64, BalanceSourceError> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [wallet],
        });

        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(self.timeout),
            ..Default::default()
        };

        let response = retry(backoff, || async {
            let response = self
                .client
                .post(&self.rpc_url)
                .timeout(self.timeout)
                .json(&payload)
                .send()
                .await
                .map_err(|e| {
                    backoff::Error::transient(BalanceSourceError::Network(e.to_string()))
                })?;

            let status = response.status();
            if status == 429 {
                return Err(backoff::Error::transient(BalanceSourceError::RateLimited));
            }
            if status.is_server_error() {
                return Err(backoff::Error::transient(BalanceSourceError::Http {
                    status: status.as_u16(),
                    message: "Server error".to_string(),
                }));
            }
            if !status.is_success() {
                return Err(backoff::Error::permanent(BalanceSourceError::Http {
                    status: status.as_u16(),
                    message: "Client error".to_string(),
                }));
            }

            response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| backoff::Error::permanent(BalanceSourceError::Parse(e.to_string())))
        })
        .await?;

        extract_lamports(&response)
    }
}

/// Pull `result.value` (lamports) out of a `getBalance` response.
fn extract_lamports(response: &serde_json::Value) -> Result<u64, BalanceSourceError> {
    if let Some(err) = response.get("error") {
        return Err(BalanceSourceError::Parse(format!("rpc error: {}", err)));
    }

    response
        .pointer("/result/value")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| BalanceSourceError::Parse("missing result.value".to_string()))
}

#[async_trait]
impl BalanceSource for SolanaRpcSource {
    async fn fetch_balance(&self, wallet: &str) -> Result<f64, BalanceSourceError> {
        debug!(wallet, "fetching balance via getBalance");
        let lamports = self.get_balance_lamports(wallet).await?;
        Ok(lamports as f64 / LAMPORTS_PER_SOL)
    }
}
