pub mod api;
pub mod balance;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;

pub use balance::{BalanceSource, BalanceSourceError, MockBalanceSource, SolanaRpcSource};
pub use config::Config;
pub use db::{init_db, BaselineStore, StoredBaseline};
pub use domain::{PnlPercent, PnlReport, WalletAddress, WalletPnlState};
pub use engine::PnlTracker;
pub use error::AppError;
