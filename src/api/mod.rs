pub mod health;
pub mod pnl;

use crate::balance::BalanceSource;
use crate::engine::PnlTracker;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<PnlTracker>,
    pub balance_source: Arc<dyn BalanceSource>,
}

impl AppState {
    pub fn new(tracker: Arc<PnlTracker>, balance_source: Arc<dyn BalanceSource>) -> Self {
        Self {
            tracker,
            balance_source,
        }
    }
}

/// Build the service router. CORS is wide open because the widget embeds
/// cross-origin.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/pnl", get(pnl::get_pnl))
        .layer(cors)
        .with_state(state)
}
