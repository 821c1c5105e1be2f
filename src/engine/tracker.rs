//! Rollover state machine and the process-wide wallet cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::db::BaselineStore;
use crate::domain::{PnlReport, WalletAddress, WalletPnlState};

use super::calendar::{start_of_month, start_of_week};

/// Per-wallet cache slot; empty until the first evaluate seeds it.
type Slot = Arc<Mutex<Option<WalletPnlState>>>;

/// Concurrent wallet cache plus the rollover-decide-and-persist sequence.
///
/// Each evaluate runs under its wallet's own lock, so two concurrent polls
/// of the same wallet cannot both decide the same rollover and race the
/// store. Different wallets proceed independently.
pub struct PnlTracker {
    store: Arc<BaselineStore>,
    persist_timeout: Duration,
    wallets: Mutex<HashMap<WalletAddress, Slot>>,
}

impl PnlTracker {
    pub fn new(store: Arc<BaselineStore>, persist_timeout: Duration) -> Self {
        Self {
            store,
            persist_timeout,
            wallets: Mutex::new(HashMap::new()),
        }
    }

    /// Evaluate one balance observation for `wallet` at `now`.
    ///
    /// `observed` is `None` when no balance could be obtained upstream; the
    /// last-known state is returned with no baseline mutation in that case.
    /// This method never fails: store errors degrade to fresh state on load
    /// and to lost durability on write.
    pub async fn evaluate(
        &self,
        wallet: &WalletAddress,
        observed: Option<f64>,
        now: NaiveDateTime,
    ) -> PnlReport {
        let slot = self.slot(wallet).await;
        let mut guard = slot.lock().await;

        if guard.is_none() {
            *guard = Some(self.seed(wallet).await);
        }
        let state = guard.get_or_insert_with(WalletPnlState::default);

        let Some(balance) = sanitize(observed) else {
            return state.report();
        };

        state.current_balance = balance;

        let today = now.date();
        if state.starting_date != Some(today) {
            state.starting_date = Some(today);
            state.starting_balance = balance;
        }

        // Week and month baselines only ever move forward; an out-of-order
        // `now` must not rewind them.
        let week_start = start_of_week(today);
        let week_rolled = match state.week_start_date {
            Some(stored) if stored >= week_start => false,
            _ => {
                state.week_start_date = Some(week_start);
                state.week_start_balance = balance;
                true
            }
        };

        let month_start = start_of_month(today);
        let month_rolled = match state.month_start_date {
            Some(stored) if stored >= month_start => false,
            _ => {
                state.month_start_date = Some(month_start);
                state.month_start_balance = balance;
                true
            }
        };

        // Persist after all in-memory mutation so carried-through fields
        // are the freshly computed values, never stale or empty.
        if week_rolled {
            self.persist_week(wallet, state).await;
        }
        if month_rolled {
            self.persist_month(wallet, state).await;
        }

        state.report()
    }

    /// Get or lazily create the cache slot for `wallet`.
    async fn slot(&self, wallet: &WalletAddress) -> Slot {
        let mut wallets = self.wallets.lock().await;
        wallets.entry(wallet.clone()).or_default().clone()
    }

    /// Build initial state from persisted week/month baselines, if any.
    /// The daily baseline always starts fresh.
    async fn seed(&self, wallet: &WalletAddress) -> WalletPnlState {
        match self.store.load_baseline(wallet).await {
            Ok(Some(row)) => {
                debug!(wallet = %wallet, "seeded week/month baselines from store");
                WalletPnlState {
                    week_start_date: Some(row.week_start_date),
                    week_start_balance: row.week_start_balance,
                    month_start_date: Some(row.month_start_date),
                    month_start_balance: row.month_start_balance,
                    ..WalletPnlState::default()
                }
            }
            Ok(None) => WalletPnlState::default(),
            Err(e) => {
                warn!(wallet = %wallet, error = %e, "baseline load failed, starting fresh");
                WalletPnlState::default()
            }
        }
    }

    async fn persist_week(&self, wallet: &WalletAddress, state: &WalletPnlState) {
        let (Some(week_date), Some(month_date)) = (state.week_start_date, state.month_start_date)
        else {
            return;
        };
        let upsert = self.store.upsert_week(
            wallet,
            week_date,
            state.week_start_balance,
            month_date,
            state.month_start_balance,
        );
        match tokio::time::timeout(self.persist_timeout, upsert).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(wallet = %wallet, error = %e, "week baseline upsert failed"),
            Err(_) => warn!(wallet = %wallet, "week baseline upsert timed out"),
        }
    }

    async fn persist_month(&self, wallet: &WalletAddress, state: &WalletPnlState) {
        let (Some(week_date), Some(month_date)) = (state.week_start_date, state.month_start_date)
        else {
            return;
        };
        let upsert = self.store.upsert_month(
            wallet,
            week_date,
            state.week_start_balance,
            month_date,
            state.month_start_balance,
        );
        match tokio::time::timeout(self.persist_timeout, upsert).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(wallet = %wallet, error = %e, "month baseline upsert failed"),
            Err(_) => warn!(wallet = %wallet, "month baseline upsert timed out"),
        }
    }
}

/// Clamp an observation to a finite, non-negative balance.
fn sanitize(observed: Option<f64>) -> Option<f64> {
    let value = observed?;
    if !value.is_finite() {
        warn!(value, "ignoring non-finite balance observation");
        return None;
    }
    if value < 0.0 {
        warn!(value, "clamping negative balance observation to zero");
        return Some(0.0);
    }
    Some(value)
}
