//! Per-wallet PnL state and the derived report returned to callers.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::percent::PnlPercent;

/// Round to 2 decimals, half away from zero, normalizing `-0.0` to `0.0`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rolling baselines and the last observation for a single wallet.
///
/// The daily baseline lives only in memory; the week and month baselines
/// are mirrored into the baseline store on rollover.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletPnlState {
    pub starting_date: Option<NaiveDate>,
    pub starting_balance: f64,
    pub week_start_date: Option<NaiveDate>,
    pub week_start_balance: f64,
    pub month_start_date: Option<NaiveDate>,
    pub month_start_balance: f64,
    pub current_balance: f64,
}

impl WalletPnlState {
    /// Derive the full PnL report from the current state.
    pub fn report(&self) -> PnlReport {
        PnlReport {
            starting_date: self.starting_date,
            starting_balance: self.starting_balance,
            week_start_date: self.week_start_date,
            week_start_balance: self.week_start_balance,
            month_start_date: self.month_start_date,
            month_start_balance: self.month_start_balance,
            current_balance: self.current_balance,
            pnl: round2(self.current_balance - self.starting_balance),
            week_pnl: round2(self.current_balance - self.week_start_balance),
            month_pnl: round2(self.current_balance - self.month_start_balance),
            pnl_percent: PnlPercent::compute(self.starting_balance, self.current_balance),
            week_pnl_percent: PnlPercent::compute(self.week_start_balance, self.current_balance),
            month_pnl_percent: PnlPercent::compute(self.month_start_balance, self.current_balance),
        }
    }
}

/// Snapshot returned by the engine and serialized as the API response.
///
/// Dates serialize as `YYYY-MM-DD`, null before the first observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlReport {
    pub starting_date: Option<NaiveDate>,
    pub starting_balance: f64,
    pub week_start_date: Option<NaiveDate>,
    pub week_start_balance: f64,
    pub month_start_date: Option<NaiveDate>,
    pub month_start_balance: f64,
    pub current_balance: f64,
    pub pnl: f64,
    pub week_pnl: f64,
    pub month_pnl: f64,
    pub pnl_percent: PnlPercent,
    pub week_pnl_percent: PnlPercent,
    pub month_pnl_percent: PnlPercent,
}
