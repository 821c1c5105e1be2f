//! `GET /pnl`: evaluate one balance observation and return the PnL report.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use tracing::warn;

use crate::api::AppState;
use crate::domain::{PnlReport, WalletAddress};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlQuery {
    pub wallet: Option<String>,
    /// Balance override from a push-subscription client; `"null"` or any
    /// unparseable value means "fetch live".
    pub current_balance: Option<String>,
}

pub async fn get_pnl(
    Query(params): Query<PnlQuery>,
    State(state): State<AppState>,
) -> Result<Json<PnlReport>, AppError> {
    let wallet = params
        .wallet
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Valid wallet address is required".to_string()))
        .and_then(|raw| {
            WalletAddress::parse(raw).map_err(|e| AppError::BadRequest(e.to_string()))
        })?;

    let observed = match parse_balance_param(params.current_balance.as_deref()) {
        Some(balance) => Some(balance),
        None => match state.balance_source.fetch_balance(wallet.as_str()).await {
            Ok(balance) => Some(balance),
            Err(e) => {
                warn!(wallet = %wallet, error = %e, "balance fetch failed, serving last known state");
                None
            }
        },
    };

    let report = state
        .tracker
        .evaluate(&wallet, observed, Local::now().naive_local())
        .await;

    Ok(Json(report))
}

fn parse_balance_param(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
